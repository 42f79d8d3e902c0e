//! 0/1 knapsack optimization.
//!
//! Searches for a high-value subset of items whose total weight stays
//! within a capacity, using two solvers:
//!
//! - **Greedy**: one-shot value/weight ratio heuristic, used as a
//!   deterministic baseline.
//! - **Genetic Algorithm (GA)**: boolean chromosomes evolved with
//!   roulette-wheel selection, single-point crossover and bit-flip
//!   mutation over a fixed number of generations.
//!
//! Neither solver guarantees an optimal subset.
//!
//! # Architecture
//!
//! - [`model`]: items, chromosomes, strategies, genes, populations
//! - [`greedy`]: ratio-ordered baseline
//! - [`ga`]: fitness, selection, operators and the generational loop
//! - [`observer`]: progress hooks (`tracing` backed or in-memory)
//! - [`scenario`]: loading, generating and running whole instances
//!
//! All randomness comes from an injected [`rand::Rng`]; runs seeded through
//! [`ga::GaConfig::with_seed`] are reproducible.

pub mod error;
pub mod ga;
pub mod greedy;
pub mod model;
pub mod observer;
pub mod random;
pub mod scenario;

pub use error::KnapsackError;
