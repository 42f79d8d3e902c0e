//! Fitness evaluation.
//!
//! A chromosome scores its total value when it fits within the weight limit
//! and zero otherwise. Infeasible genes stay in the population; they just
//! never win a roulette draw while any feasible gene has a positive score.

use crate::model::{Chromosome, Knapsack, Population, Strategy};

/// Aggregate scores of one evaluated generation.
///
/// Both values are in the integer domain: each gene's score is truncated
/// to `u64` before summing, and the sum saturates at `u64::MAX`. Roulette
/// sampling draws from `[0, total_score]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopulationStats {
    pub total_score: u64,
    pub max_score: u64,
    /// Index of the first gene reaching `max_score`.
    pub best_index: usize,
}

/// Evaluates `chosen` against `problem`, returning a fresh [`Strategy`].
///
/// # Panics
/// Panics if the chromosome length differs from the item count.
pub fn evaluate(problem: &Knapsack<'_>, chosen: Chromosome) -> Strategy {
    assert_eq!(
        chosen.len(),
        problem.len(),
        "chromosome length must equal item count"
    );

    let (sum_value, sum_weight) = problem
        .items
        .iter()
        .zip(&chosen)
        .filter(|&(_, &on)| on)
        .fold((0.0, 0.0), |(v, w), (item, _)| (v + item.value, w + item.weight));

    let score = if sum_weight > problem.weight_limit {
        0.0
    } else {
        sum_value
    };

    Strategy {
        chosen,
        sum_value,
        sum_weight,
        score,
    }
}

/// Re-evaluates every gene of `population` and returns the aggregate scores.
///
/// Each gene's strategy is replaced, not patched: sums are recomputed from
/// scratch every generation.
pub fn evaluate_population(problem: &Knapsack<'_>, population: &mut Population) -> PopulationStats {
    let mut stats = PopulationStats::default();

    for (i, gene) in population.genes.iter_mut().enumerate() {
        let chosen = std::mem::take(&mut gene.strategy.chosen);
        gene.strategy = evaluate(problem, chosen);

        let score = gene.strategy.score as u64;
        stats.total_score = stats.total_score.saturating_add(score);
        if score > stats.max_score {
            stats.max_score = score;
            stats.best_index = i;
        }
    }

    stats
}
