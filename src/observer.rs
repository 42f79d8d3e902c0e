//! Progress observation hooks.
//!
//! The solvers report progress through [`Observer`] and never depend on how
//! it is rendered. Observations have no influence on the search.

/// Receives progress from the solvers.
///
/// All methods default to no-ops.
pub trait Observer {
    /// Called after a generation has been evaluated, at the configured
    /// logging interval.
    fn on_generation(&mut self, _generation: usize, _max_score: u64) {}

    /// Called once when the greedy baseline has finished.
    fn on_greedy(&mut self, _score: f64) {}
}

/// Discards every observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// Emits observations as `tracing` events at `INFO` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_generation(&mut self, generation: usize, max_score: u64) {
        tracing::info!(generation, max_score, "generation evaluated");
    }

    fn on_greedy(&mut self, score: f64) {
        tracing::info!(score, "greedy baseline finished");
    }
}

/// Records every observation in memory.
#[derive(Debug, Clone, Default)]
pub struct HistoryObserver {
    /// `(generation, max_score)` pairs in emission order.
    pub generations: Vec<(usize, u64)>,
    pub greedy: Option<f64>,
}

impl Observer for HistoryObserver {
    fn on_generation(&mut self, generation: usize, max_score: u64) {
        self.generations.push((generation, max_score));
    }

    fn on_greedy(&mut self, score: f64) {
        self.greedy = Some(score);
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_generation(&mut self, generation: usize, max_score: u64) {
        (**self).on_generation(generation, max_score);
    }

    fn on_greedy(&mut self, score: f64) {
        (**self).on_greedy(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_records_in_order() {
        let mut obs = HistoryObserver::default();
        obs.on_generation(1, 10);
        obs.on_generation(2, 12);
        obs.on_greedy(99.0);
        assert_eq!(obs.generations, vec![(1, 10), (2, 12)]);
        assert_eq!(obs.greedy, Some(99.0));
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn emit<O: Observer>(mut observer: O) {
            observer.on_generation(3, 7);
        }

        let mut obs = HistoryObserver::default();
        emit(&mut obs);
        assert_eq!(obs.generations, vec![(3, 7)]);
    }
}
