//! Roulette-wheel parent selection.
//!
//! Each gene owns a slice of the wheel proportional to its score. The draw
//! is made in the integer domain `[0, total_score]`, matching the truncated
//! totals produced by [`evaluate_population`](super::evaluate_population).
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use crate::model::Gene;
use rand::Rng;

/// Selects one parent index with probability proportional to its score.
///
/// Draws `pick` uniformly from the closed range `[0, total_score]`, then
/// walks `genes` in order and returns the first index whose cumulative
/// score reaches `pick`. When rounding lets the walk run off the end, the
/// last index is returned.
///
/// With `total_score == 0` the draw is always 0 and the first gene wins.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `genes` is empty.
pub fn roulette<R: Rng>(genes: &[Gene], total_score: u64, rng: &mut R) -> usize {
    assert!(!genes.is_empty(), "cannot select from empty population");

    let pick = rng.random_range(0..=total_score);
    roulette_at(genes, pick)
}

/// The deterministic walk behind [`roulette`] for a given draw.
///
/// # Panics
/// Panics if `genes` is empty.
pub fn roulette_at(genes: &[Gene], pick: u64) -> usize {
    assert!(!genes.is_empty(), "cannot select from empty population");

    let pick = pick as f64;
    let mut cumulative = 0.0;
    for (i, gene) in genes.iter().enumerate() {
        cumulative += gene.score();
        if pick <= cumulative {
            return i;
        }
    }

    genes.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Strategy;
    use crate::random::create_rng;

    fn make_genes(scores: &[f64]) -> Vec<Gene> {
        scores
            .iter()
            .map(|&score| Gene {
                strategy: Strategy {
                    score,
                    ..Strategy::default()
                },
            })
            .collect()
    }

    fn total(genes: &[Gene]) -> u64 {
        genes.iter().map(|g| g.score() as u64).sum()
    }

    #[test]
    fn test_first_gene_covers_whole_range() {
        let genes = make_genes(&[10.0, 0.0]);
        for pick in 0..=10 {
            assert_eq!(roulette_at(&genes, pick), 0, "pick={pick}");
        }

        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert_eq!(roulette(&genes, 10, &mut rng), 0);
        }
    }

    #[test]
    fn test_cumulative_boundaries() {
        let genes = make_genes(&[3.0, 0.0, 5.0, 2.0]);
        assert_eq!(roulette_at(&genes, 0), 0);
        assert_eq!(roulette_at(&genes, 3), 0);
        assert_eq!(roulette_at(&genes, 4), 2);
        assert_eq!(roulette_at(&genes, 8), 2);
        assert_eq!(roulette_at(&genes, 9), 3);
        assert_eq!(roulette_at(&genes, 10), 3);
    }

    #[test]
    fn test_zero_total_selects_first() {
        let genes = make_genes(&[0.0, 0.0, 0.0]);
        let mut rng = create_rng(7);
        for _ in 0..100 {
            assert_eq!(roulette(&genes, 0, &mut rng), 0);
        }
    }

    #[test]
    fn test_overshooting_pick_falls_back_to_last() {
        // Draws past the accumulated scores; in a run this only happens
        // through floating-point accumulation error.
        let genes = make_genes(&[0.4, 0.4]);
        assert_eq!(roulette_at(&genes, 1), 1);
        assert_eq!(roulette_at(&genes, 100), 1);
    }

    #[test]
    fn test_proportional_frequencies() {
        let genes = make_genes(&[10.0, 30.0, 60.0]);
        let total = total(&genes);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        let n = 20_000;
        for _ in 0..n {
            counts[roulette(&genes, total, &mut rng)] += 1;
        }

        assert!(
            counts[2] > counts[1] && counts[1] > counts[0],
            "expected frequencies ordered by score, got {counts:?}"
        );
        let share = counts[2] as f64 / n as f64;
        assert!(
            (share - 0.6).abs() < 0.03,
            "expected ~60% for the best gene, got {share}"
        );
    }

    #[test]
    fn test_single_gene() {
        let genes = make_genes(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(roulette(&genes, 5, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_walk_on_empty_population_panics() {
        roulette_at(&[], 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        roulette(&[], 0, &mut rng);
    }
}
