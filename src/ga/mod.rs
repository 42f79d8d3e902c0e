//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! Chromosomes are boolean vectors, one position per item. Each generation
//! is evaluated, then fully replaced by offspring bred through roulette
//! selection, single-point crossover and bit-flip mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best strategy found and per-generation scores
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use fitness::{evaluate, evaluate_population, PopulationStats};
pub use runner::{initial_population, next_generation, GaResult, GaRunner};
pub use selection::{roulette, roulette_at};
