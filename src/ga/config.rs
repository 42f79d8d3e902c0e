//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Every value is fixed for the duration of a run.

use crate::error::KnapsackError;
use serde::{Deserialize, Serialize};

/// Configuration for the knapsack Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_max_generations(2_000)
///     .with_mutation_rate(0.01)
///     .with_log_interval(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of genes in every generation.
    ///
    /// Each generation breeds `population_size / 2` pairs, so odd sizes
    /// shrink by one after the first replacement.
    pub population_size: usize,

    /// Number of evaluate/breed cycles. The loop always runs all of them.
    pub max_generations: usize,

    /// Per-position bit flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Report progress every `log_interval` generations, starting with the
    /// first.
    pub log_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            mutation_rate: 0.005,
            log_interval: 1000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the progress reporting interval (at least 1).
    pub fn with_log_interval(mut self, every: usize) -> Self {
        self.log_interval = every.max(1);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: small population, few generations.
    ///
    /// - Population: 50, Generations: 200, Log interval: 50
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            log_interval: 50,
            ..Self::default()
        }
    }

    /// Preset for long runs on large instances.
    ///
    /// - Population: 100, Generations: 500 000, Log interval: 1000
    pub fn thorough() -> Self {
        Self {
            max_generations: 500_000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`KnapsackError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<(), KnapsackError> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        if self.log_interval == 0 {
            return Err(invalid("log_interval must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> KnapsackError {
    KnapsackError::InvalidConfig(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 500);
        assert!((config.mutation_rate - 0.005).abs() < 1e-12);
        assert_eq!(config.log_interval, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_mutation_rate(0.05)
            .with_log_interval(5)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 30);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.log_interval, 5);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::fast().validate().is_ok());
        assert!(GaConfig::thorough().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(matches!(
            config.validate(),
            Err(KnapsackError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rate_set_directly() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GaConfig {
            mutation_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_log_interval() {
        let config = GaConfig {
            log_interval: 0,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamps() {
        let config = GaConfig::default()
            .with_mutation_rate(2.0)
            .with_log_interval(0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-12);
        assert_eq!(config.log_interval, 1);

        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert_eq!(config.mutation_rate, 0.0);
    }

    #[test]
    fn test_presets() {
        let fast = GaConfig::fast();
        assert_eq!(fast.population_size, 50);
        assert_eq!(fast.max_generations, 200);
        assert_eq!(fast.log_interval, 50);

        let thorough = GaConfig::thorough().with_seed(1);
        assert_eq!(thorough.max_generations, 500_000);
        assert_eq!(thorough.seed, Some(1));
    }
}
