//! Generational GA driver with truncation selection.
//!
//! # Algorithm
//!
//! ```text
//! INIT → { EVALUATE → SELECT → REPRODUCE → MUTATE → REPLACE } × max_generations
//! ```
//!
//! - **INIT**: `population_size` random individuals.
//! - **EVALUATE**: score every individual (higher is better).
//! - **SELECT**: sort descending, keep the top `population_size / 2`.
//! - **REPRODUCE**: pick two distinct parents uniformly from the kept set,
//!   cross them over, repeat until the population can be refilled.
//! - **MUTATE**: mutate every child.
//! - **REPLACE**: next population = kept parents ++ children.
//!
//! The generation budget is fixed; there is no convergence test. After the
//! last generation the final population is scored once more and its best
//! individual is returned. Since the kept parents survive unchanged, that
//! individual is at least as good as anything seen earlier.
//!
//! Truncation works with any fitness values, including `-∞`, unlike
//! fitness-proportional (roulette) selection.

use std::time::Instant;

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::config::{ConfigError, GaConfig};

/// Defines an optimization problem for [`GaRunner`].
///
/// Fitness is maximized. Variation operators receive the run's
/// [`GaConfig`], which is the only place operator choice and mutation rate
/// are configured.
pub trait GaProblem {
    /// Candidate solution representation.
    type Individual: Clone;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual (higher is better, `-∞` for infeasible).
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Breeds one child from two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        config: &GaConfig,
        rng: &mut R,
    ) -> Self::Individual;

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, config: &GaConfig, rng: &mut R);
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Best individual of the final population.
    pub best: I,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Best fitness of each evaluated generation.
    pub history: Vec<f64>,
    /// Total fitness evaluations.
    pub evaluations: usize,
    /// Seed the run was started from, when the runner created the RNG.
    pub seed: Option<u64>,
}

/// Genetic algorithm runner.
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`, or from a fresh
    /// random seed which is reported in [`GaResult::seed`].
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>, ConfigError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut result = Self::run_with_rng(problem, config, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs the GA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        let started = Instant::now();
        let retained = config.retained_count();
        let offspring = config.offspring_count();

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        let mut history = Vec::with_capacity(config.max_generations);
        let mut evaluations = 0;

        for generation in 0..config.max_generations {
            let mut graded = grade(problem, population);
            evaluations += graded.len();

            let best = graded.first().map_or(f64::NEG_INFINITY, |(f, _)| *f);
            let feasible = graded.iter().filter(|(f, _)| f.is_finite()).count();
            history.push(best);
            debug!(
                "generation {generation}: best {best}, feasible {feasible}/{}",
                graded.len()
            );

            graded.truncate(retained);
            let mut next: Vec<P::Individual> = graded.into_iter().map(|(_, ind)| ind).collect();

            let mut children = Vec::with_capacity(offspring);
            while children.len() < offspring {
                let picks = index::sample(rng, next.len(), 2);
                let child =
                    problem.crossover(&next[picks.index(0)], &next[picks.index(1)], config, rng);
                children.push(child);
            }
            for child in children.iter_mut() {
                problem.mutate(child, config, rng);
            }

            next.extend(children);
            population = next;
        }

        let graded = grade(problem, population);
        evaluations += graded.len();
        let (best_fitness, best) = graded
            .into_iter()
            .next()
            // validate() keeps the population at 4 or more, so this only
            // fires for an empty one.
            .ok_or(ConfigError::PopulationTooSmall(config.population_size))?;

        debug!(
            "GA finished {} generations ({evaluations} evaluations) in {:.2?}, best {best_fitness}",
            config.max_generations,
            started.elapsed()
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.max_generations,
            history,
            evaluations,
            seed: None,
        })
    }
}

/// Scores a population and sorts it best-first. The sort is stable, so
/// ties keep population order.
fn grade<P: GaProblem>(problem: &P, population: Vec<P::Individual>) -> Vec<(f64, P::Individual)> {
    let mut graded: Vec<(f64, P::Individual)> = population
        .into_iter()
        .map(|ind| (problem.evaluate(&ind), ind))
        .collect();
    graded.sort_by(|a, b| b.0.total_cmp(&a.0));
    graded
}
