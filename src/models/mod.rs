//! Seating domain models.
//!
//! Plain value types describing one seating problem and its solution.
//! Everything here is created per request and discarded afterwards.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Student` | A person to be seated (`id`, `name`) |
//! | `Seat` | A `(row, col)` coordinate, `"row-col"` on the wire |
//! | `SeatPool` | The seats usable in this run |
//! | `Relation` | An avoid/prefer link between two students |
//! | `ConstraintIndex` | Canonical avoid/prefer pair sets |
//! | `SeatAssignment` | Student → seat mapping (candidate or final) |

mod assignment;
mod constraint;
mod seat;
mod student;

pub use assignment::{SeatAssignment, SeatPlacement};
pub use constraint::{ConstraintIndex, Relation, RelationKind, StudentPair};
pub use seat::{ParseSeatError, Seat, SeatPool};
pub use student::{Student, StudentId};
