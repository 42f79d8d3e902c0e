//! Bit-string genetic operators.
//!
//! Crossover and mutation for boolean chromosomes. Both operators leave
//! their inputs untouched and return newly allocated chromosomes of the
//! same length.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: random cut in `[1, L-1]`
//! - [`single_point_crossover_at`]: same, with an explicit cut
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: independent per-position flips, O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use crate::model::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut `c` uniformly in `[1, L-1]`, so both children inherit a
/// non-empty prefix and suffix from each parent:
///
/// - child1 = `parent1[..c]` ++ `parent2[c..]`
/// - child2 = `parent2[..c]` ++ `parent1[c..]`
///
/// Chromosomes shorter than 2 have no interior cut and are returned as
/// copies of the parents.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    single_point_crossover_at(parent1, parent2, cut)
}

/// Single-point crossover at a fixed cut.
///
/// # Panics
/// Panics if parents have different lengths or `cut > L`.
pub fn single_point_crossover_at(
    parent1: &[bool],
    parent2: &[bool],
    cut: usize,
) -> (Chromosome, Chromosome) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(cut <= parent1.len(), "cut point out of range");

    let child1 = [&parent1[..cut], &parent2[cut..]].concat();
    let child2 = [&parent2[..cut], &parent1[cut..]].concat();
    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation.
///
/// Returns a copy of `chromosome` where each position is negated when an
/// independent uniform draw in `[0, 1)` falls below `rate`. A rate of 0
/// yields an exact copy and a rate of 1 the full complement.
///
/// # Complexity
/// O(n), one draw per position
pub fn bit_flip_mutation<R: Rng>(chromosome: &[bool], rate: f64, rng: &mut R) -> Chromosome {
    chromosome
        .iter()
        .map(|&bit| {
            if rng.random::<f64>() < rate {
                !bit
            } else {
                bit
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
