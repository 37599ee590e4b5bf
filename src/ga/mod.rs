//! GA-based seat assignment optimization.
//!
//! A generational genetic algorithm with truncation selection searches for
//! a student → seat bijection that keeps avoid pairs apart and prefer pairs
//! together.
//!
//! # Encoding
//!
//! A chromosome is a seat vector aligned to a fixed student ordering
//! (gene `i` = seat of student `i`). Chromosomes may transiently reuse a
//! seat; the fitness function scores those `-∞` so selection drops them.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Mühlenbein & Schlierkamp-Voosen (1993), truncation selection in the breeder GA

mod chromosome;
mod config;
mod fitness;
pub mod operators;
mod problem;
mod runner;

pub use chromosome::{
    order_crossover, random_reset_mutation, single_point_crossover, swap_mutation, SeatChromosome,
};
pub use config::{ConfigError, GaConfig};
pub use fitness::{avoid_penalty, prefer_reward, FitnessEvaluator};
pub(crate) use fitness::pair_distance;
pub use problem::SeatingGaProblem;
pub use runner::{GaProblem, GaResult, GaRunner};
