//! GA configuration.

use serde::{Deserialize, Serialize};

use super::operators::GeneticOperators;

/// Configuration for the seating GA.
///
/// Defaults: 50 individuals, 100 generations, per-gene mutation rate 0.1,
/// single-point crossover with random-reset mutation. Each generation
/// retains the top `population_size / 2` individuals and refills the rest
/// with offspring.
///
/// # Examples
///
/// ```
/// use u_seating::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_max_generations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Individuals per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Fixed generation budget. There is no early stop.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,

    /// Per-gene mutation probability (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Crossover and mutation strategy.
    #[serde(default)]
    pub operators: GeneticOperators,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_population_size() -> usize {
    50
}
fn default_max_generations() -> usize {
    100
}
fn default_mutation_rate() -> f64 {
    0.1
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            max_generations: default_max_generations(),
            mutation_rate: default_mutation_rate(),
            operators: GeneticOperators::default(),
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

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate (clamped to [0, 1]).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover and mutation strategy.
    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of parents kept by truncation selection.
    pub fn retained_count(&self) -> usize {
        self.population_size / 2
    }

    /// Number of offspring bred per generation.
    pub fn offspring_count(&self) -> usize {
        self.population_size - self.retained_count()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 4 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}

/// GA configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Truncation needs at least two distinct parents.
    #[error("Population size must be at least 4, got {0}")]
    PopulationTooSmall(usize),
    /// The generation budget is zero.
    #[error("Generation budget must be at least 1")]
    NoGenerations,
    /// The mutation rate lies outside `[0, 1]`.
    #[error("Mutation rate must be within [0, 1], got {0}")]
    InvalidMutationRate(f64),
}
