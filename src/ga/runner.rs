//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement → repeat, for a fixed number of generations.

use super::config::GaConfig;
use super::fitness::{evaluate, evaluate_population};
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::roulette;
use crate::error::KnapsackError;
use crate::model::{Gene, Knapsack, Population, Strategy};
use crate::observer::Observer;
use crate::random::rng_from_seed;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best evaluated strategy seen during the run. Ties keep the
    /// earliest. When no generation scored above zero this is the empty
    /// selection.
    pub best: Strategy,

    /// Score of `best`, truncated to the integer domain.
    pub best_score: u64,

    /// Number of evaluate/breed cycles executed.
    pub generations: usize,

    /// Max score of every evaluated generation, in order.
    pub score_history: Vec<u64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{GaConfig, GaRunner};
/// use u_knapsack::model::{Item, Knapsack};
/// use u_knapsack::observer::NoopObserver;
///
/// let items = vec![
///     Item::new(0, 60.0, 10.0),
///     Item::new(1, 100.0, 20.0),
///     Item::new(2, 120.0, 30.0),
/// ];
/// let problem = Knapsack::new(&items, 50.0);
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config, &mut NoopObserver).unwrap();
/// assert_eq!(result.generations, 50);
/// assert!(result.best.sum_weight <= 50.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from [`GaConfig::seed`].
    ///
    /// Returns [`KnapsackError::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn run<O: Observer>(
        problem: &Knapsack<'_>,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult, KnapsackError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng, observer)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng, O: Observer>(
        problem: &Knapsack<'_>,
        config: &GaConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<GaResult, KnapsackError> {
        config.validate()?;

        tracing::debug!(
            items = problem.len(),
            weight_limit = problem.weight_limit,
            population_size = config.population_size,
            max_generations = config.max_generations,
            mutation_rate = config.mutation_rate,
            "starting GA run"
        );

        // 1. Initialize population
        let mut population = initial_population(problem.len(), config.population_size, rng);

        // The empty selection is always feasible and scores zero.
        let mut best = evaluate(problem, vec![false; problem.len()]);
        let mut best_score = 0u64;
        let mut score_history = Vec::with_capacity(config.max_generations);

        // 2. Evolutionary loop
        for _ in 0..config.max_generations {
            // Evaluate
            let stats = evaluate_population(problem, &mut population);
            score_history.push(stats.max_score);

            if (population.generation - 1) % config.log_interval == 0 {
                observer.on_generation(population.generation, stats.max_score);
            }

            if stats.max_score > best_score {
                best_score = stats.max_score;
                best = population.genes[stats.best_index].strategy.clone();
            }

            // Breed and replace
            population = next_generation(&population, stats.total_score, config, rng);
        }

        tracing::debug!(best_score, generations = config.max_generations, "GA run finished");

        Ok(GaResult {
            best,
            best_score,
            generations: config.max_generations,
            score_history,
        })
    }
}

/// Builds the first generation. Each position is selected on a fair coin;
/// sums stay at zero until the first evaluation.
pub fn initial_population<R: Rng>(n_items: usize, size: usize, rng: &mut R) -> Population {
    let genes = (0..size)
        .map(|_| Gene::new((0..n_items).map(|_| rng.random_bool(0.5)).collect()))
        .collect();

    Population {
        genes,
        generation: 1,
    }
}

/// Breeds the next generation from an evaluated `population`.
///
/// Runs `population_size / 2` rounds of roulette selection (parents may
/// coincide), single-point crossover and per-child mutation. The returned
/// population holds `2 * (population_size / 2)` unevaluated genes and the
/// next generation number.
pub fn next_generation<R: Rng>(
    population: &Population,
    total_score: u64,
    config: &GaConfig,
    rng: &mut R,
) -> Population {
    let pairs = config.population_size / 2;
    let mut genes = Vec::with_capacity(pairs * 2);

    for _ in 0..pairs {
        // Selection
        let p1 = roulette(&population.genes, total_score, rng);
        let p2 = roulette(&population.genes, total_score, rng);

        // Crossover
        let (c1, c2) = single_point_crossover(
            population.genes[p1].chromosome(),
            population.genes[p2].chromosome(),
            rng,
        );

        // Mutation
        genes.push(Gene::new(bit_flip_mutation(&c1, config.mutation_rate, rng)));
        genes.push(Gene::new(bit_flip_mutation(&c2, config.mutation_rate, rng)));
    }

    Population {
        genes,
        generation: population.generation + 1,
    }
}

// ============================================================================
// Tests
// ============================================================================
