//! Seating GA problem definition.
//!
//! Implements [`GaProblem`] for seat assignment. Bridges the domain models
//! (students, seat pool, relations) to the generic GA driver. Operator choice
//! and mutation rate are read from the [`GaConfig`] the runner passes in.

use rand::Rng;

use super::chromosome::SeatChromosome;
use super::config::GaConfig;
use super::fitness::FitnessEvaluator;
use super::runner::GaProblem;
use crate::models::{ConstraintIndex, SeatAssignment, SeatPool, StudentId};

/// GA problem definition for seat assignment.
///
/// Gene `i` of every chromosome is the seat of `student_ids[i]`.
///
/// # Example
/// ```
/// use u_seating::ga::{GaConfig, GaRunner, SeatingGaProblem};
/// use u_seating::models::{ConstraintIndex, Relation, SeatPool, StudentId};
///
/// let ids: Vec<StudentId> = vec![1.into(), 2.into()];
/// let pool = SeatPool::parse(&["0-0", "0-1", "0-4"]).unwrap();
/// let index = ConstraintIndex::from_relations(&[Relation::avoid(1, 2)]);
/// let problem = SeatingGaProblem::new(ids, pool, index);
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best_fitness, 0.0); // the pair ends up 3+ seats apart
/// ```
#[derive(Debug, Clone)]
pub struct SeatingGaProblem {
    student_ids: Vec<StudentId>,
    pool: SeatPool,
    evaluator: FitnessEvaluator,
}

impl SeatingGaProblem {
    /// Creates a problem over `student_ids` and `pool`.
    pub fn new(student_ids: Vec<StudentId>, pool: SeatPool, constraints: ConstraintIndex) -> Self {
        let evaluator = FitnessEvaluator::new(constraints, pool.clone(), student_ids.len());
        Self {
            student_ids,
            pool,
            evaluator,
        }
    }

    /// Student ordering the genes are aligned to.
    pub fn student_ids(&self) -> &[StudentId] {
        &self.student_ids
    }

    /// The seat pool.
    pub fn pool(&self) -> &SeatPool {
        &self.pool
    }

    /// The fitness evaluator.
    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Decodes a chromosome into a student → seat assignment.
    pub fn decode(&self, chromosome: &SeatChromosome) -> SeatAssignment {
        chromosome.to_assignment(&self.student_ids)
    }
}

impl GaProblem for SeatingGaProblem {
    type Individual = SeatChromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> SeatChromosome {
        SeatChromosome::random(&self.pool, self.student_ids.len(), rng)
    }

    fn evaluate(&self, individual: &SeatChromosome) -> f64 {
        self.evaluator.score(&self.decode(individual))
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &SeatChromosome,
        parent2: &SeatChromosome,
        config: &GaConfig,
        rng: &mut R,
    ) -> SeatChromosome {
        config.operators.crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut SeatChromosome, config: &GaConfig, rng: &mut R) {
        config
            .operators
            .mutate(individual, &self.pool, config.mutation_rate, rng);
    }
}
