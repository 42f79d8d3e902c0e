//! Domain model shared by the greedy and GA solvers.
//!
//! - [`Item`]: immutable `{index, value, weight}` record
//! - [`Chromosome`]: one selection flag per item, in instance order
//! - [`Strategy`]: a chromosome plus its evaluated sums and score
//! - [`Gene`] / [`Population`]: GA population membership
//! - [`Knapsack`]: items plus the capacity they are packed against

use serde::{Deserialize, Serialize};

/// A candidate item. Never mutated after loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier from the input source. Not used for addressing; chromosome
    /// positions follow the order of the item slice.
    pub index: usize,
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(index: usize, value: f64, weight: f64) -> Self {
        Self {
            index,
            value,
            weight,
        }
    }

    /// Value per unit of weight. Zero-weight items rank as `+inf`, including
    /// the `0 / 0` case, so the ratio is never NaN for valid items.
    pub fn ratio(&self) -> f64 {
        if self.weight == 0.0 {
            f64::INFINITY
        } else {
            self.value / self.weight
        }
    }
}

/// Position `i` is `true` when the i-th item of the instance is selected.
pub type Chromosome = Vec<bool>;

/// A chromosome together with its evaluated totals.
///
/// `sum_value`, `sum_weight` and `score` are zero until the chromosome has
/// been evaluated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Strategy {
    pub chosen: Chromosome,
    pub sum_value: f64,
    pub sum_weight: f64,
    pub score: f64,
}

impl Strategy {
    /// An unevaluated strategy selecting nothing out of `n` items.
    pub fn empty(n: usize) -> Self {
        Self::unevaluated(vec![false; n])
    }

    /// Wraps a chromosome with all sums left at zero.
    pub fn unevaluated(chosen: Chromosome) -> Self {
        Self {
            chosen,
            ..Self::default()
        }
    }

    /// Positions of the selected items.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.chosen
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }
}

/// A member of the GA population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub strategy: Strategy,
}

impl Gene {
    pub fn new(chosen: Chromosome) -> Self {
        Self {
            strategy: Strategy::unevaluated(chosen),
        }
    }

    pub fn chromosome(&self) -> &[bool] {
        &self.strategy.chosen
    }

    pub fn score(&self) -> f64 {
        self.strategy.score
    }
}

/// One generation of genes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub genes: Vec<Gene>,
    /// Starts at 1 and increments on every replacement.
    pub generation: usize,
}

impl Population {
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// A knapsack instance: items and the capacity they are packed against.
///
/// Borrowed immutably by every solver.
#[derive(Debug, Clone, Copy)]
pub struct Knapsack<'a> {
    pub items: &'a [Item],
    pub weight_limit: f64,
}

impl<'a> Knapsack<'a> {
    pub fn new(items: &'a [Item], weight_limit: f64) -> Self {
        Self {
            items,
            weight_limit,
        }
    }

    /// Number of items, and therefore the length of every chromosome.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
