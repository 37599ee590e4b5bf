//! Configurable genetic operators for seating.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`].
//!
//! The default pair (single-point crossover, random-reset mutation) lets
//! invalid children into the population and relies on fitness to drop
//! them. The alternative pair (order crossover, swap mutation) repairs on
//! construction: every child stays a valid seat permutation, which
//! converges faster on crowded pools.
//!
//! # Usage
//!
//! ```
//! use u_seating::ga::operators::{GeneticOperators, CrossoverType, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::SinglePoint);
//! assert_eq!(ops.mutation_type, MutationType::RandomReset);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::{
    order_crossover, random_reset_mutation, single_point_crossover, swap_mutation, SeatChromosome,
};
use crate::models::SeatPool;

/// Crossover strategy for seat chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverType {
    /// Prefix of parent 1 + suffix of parent 2 at a random pivot.
    #[default]
    SinglePoint,
    /// Order Crossover (Davis, 1985), uniqueness-preserving.
    Order,
}

/// Mutation strategy for seat chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationType {
    /// Per-gene reset to a random pool seat, at the configured rate.
    #[default]
    RandomReset,
    /// Exchange two random positions (once per mutated child).
    Swap,
}

/// Runtime-selectable genetic operators for the seating GA.
///
/// # Example
///
/// ```
/// use u_seating::ga::operators::{GeneticOperators, CrossoverType, MutationType};
///
/// let ops = GeneticOperators {
///     crossover_type: CrossoverType::Order,
///     mutation_type: MutationType::Swap,
/// };
/// assert!(ops.preserves_validity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneticOperators {
    /// Crossover strategy.
    #[serde(default)]
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    #[serde(default)]
    pub mutation_type: MutationType,
}

impl GeneticOperators {
    /// Order crossover + swap mutation.
    pub fn permutation_preserving() -> Self {
        Self {
            crossover_type: CrossoverType::Order,
            mutation_type: MutationType::Swap,
        }
    }

    /// Whether valid parents always yield valid children.
    pub fn preserves_validity(&self) -> bool {
        self.crossover_type == CrossoverType::Order && self.mutation_type == MutationType::Swap
    }

    /// Performs crossover using the configured strategy.
    pub fn crossover<R: Rng>(
        &self,
        p1: &SeatChromosome,
        p2: &SeatChromosome,
        rng: &mut R,
    ) -> SeatChromosome {
        match self.crossover_type {
            CrossoverType::SinglePoint => single_point_crossover(p1, p2, rng),
            CrossoverType::Order => order_crossover(p1, p2, rng),
        }
    }

    /// Performs mutation using the configured strategy.
    ///
    /// `rate` is the per-gene probability for random reset; swap mutation
    /// fires once with probability `rate`.
    pub fn mutate<R: Rng>(
        &self,
        chromosome: &mut SeatChromosome,
        pool: &SeatPool,
        rate: f64,
        rng: &mut R,
    ) {
        match self.mutation_type {
            MutationType::RandomReset => random_reset_mutation(chromosome, pool, rate, rng),
            MutationType::Swap => {
                if rng.random::<f64>() < rate {
                    swap_mutation(chromosome, rng);
                }
            }
        }
    }
}
