//! Greedy value/weight ratio baseline.
//!
//! Items are visited in descending ratio order and accepted whenever they
//! still fit. The result is a single [`Strategy`] used as a reference point
//! for the GA.

use crate::model::{Knapsack, Strategy};
use crate::observer::Observer;

/// Builds the greedy strategy for `problem`.
///
/// The sort is stable, so items with equal ratios keep their input order and
/// the output is reproducible. Zero-weight items have an infinite ratio
/// (see [`Item::ratio`](crate::model::Item::ratio)) and are visited first.
///
/// # Complexity
/// O(n log n)
pub fn solve(problem: &Knapsack<'_>) -> Strategy {
    let mut order: Vec<usize> = (0..problem.len()).collect();
    order.sort_by(|&a, &b| {
        problem.items[b]
            .ratio()
            .total_cmp(&problem.items[a].ratio())
    });

    let mut strategy = Strategy::empty(problem.len());
    for pos in order {
        let item = &problem.items[pos];
        if strategy.sum_weight + item.weight <= problem.weight_limit {
            strategy.chosen[pos] = true;
            strategy.sum_value += item.value;
            strategy.sum_weight += item.weight;
            // Feasible by construction, so the score tracks the value.
            strategy.score += item.value;
        }
    }
    strategy
}

/// Runs [`solve`] and reports the score to `observer`.
pub fn solve_observed<O: Observer>(problem: &Knapsack<'_>, observer: &mut O) -> Strategy {
    let strategy = solve(problem);
    observer.on_greedy(strategy.score);
    strategy
}
