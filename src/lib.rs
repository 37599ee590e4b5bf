//! Classroom seat assignment for the U-Engine ecosystem.
//!
//! Places students on a seat pool so that "avoid" pairs sit far apart and
//! "prefer" pairs sit close together, using a genetic algorithm.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Student`, `Seat`, `SeatPool`, `Relation`,
//!   `ConstraintIndex`, `SeatAssignment`
//! - **`validation`**: Input checks (seat count, seat tokens, duplicate IDs)
//!   and final assignment verification
//! - **`ga`**: Fitness function, chromosome operators and the GA driver
//! - **`planner`**: Request → plan pipeline, KPIs and seat chart layout
//! - **`error`**: [`SeatingError`], split into client and service errors
//!
//! # Example
//!
//! ```
//! use u_seating::models::{Relation, Student};
//! use u_seating::planner::{SeatPlanner, SeatingRequest};
//!
//! let request = SeatingRequest::new(
//!     vec![Student::new(1, "Lin"), Student::new(2, "Mei"), Student::new(3, "Ravi")],
//!     ["0-0", "0-1", "0-2", "1-0", "1-1", "1-2"],
//! )
//! .with_relation(Relation::prefer(1, 2));
//!
//! let plan = SeatPlanner::new().plan(&request).unwrap();
//! assert_eq!(plan.placements.len(), 3);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing"

pub mod error;
pub mod ga;
pub mod models;
pub mod planner;
pub mod validation;

pub use error::SeatingError;
