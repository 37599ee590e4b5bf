//! Seat assignment (solution) model.
//!
//! A [`SeatAssignment`] maps student ids to seats. Candidates produced
//! during search may be partial or reuse a seat; the fitness evaluator and
//! the result validator decide whether a given assignment is acceptable.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Seat, Student, StudentId};

/// Student id → seat mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatAssignment {
    seats: HashMap<StudentId, Seat>,
}

impl SeatAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `seat` to `student`, returning the previous seat if any.
    pub fn insert(&mut self, student: StudentId, seat: Seat) -> Option<Seat> {
        self.seats.insert(student, seat)
    }

    /// Seat of a student.
    pub fn seat_of(&self, student: &StudentId) -> Option<Seat> {
        self.seats.get(student).copied()
    }

    /// Number of mapped students.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether no student is mapped.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Number of distinct seats in use.
    pub fn distinct_seat_count(&self) -> usize {
        self.seats.values().collect::<HashSet<_>>().len()
    }

    /// Iterates `(student, seat)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&StudentId, &Seat)> {
        self.seats.iter()
    }

    /// Iterates assigned seats in arbitrary order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.values()
    }
}

impl FromIterator<(StudentId, Seat)> for SeatAssignment {
    fn from_iter<I: IntoIterator<Item = (StudentId, Seat)>>(iter: I) -> Self {
        Self {
            seats: iter.into_iter().collect(),
        }
    }
}

/// One output record: a student and the seat they were given.
///
/// Wire form: `{"student": {"id", "name"}, "position": {"row", "col"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPlacement {
    /// The seated student.
    pub student: Student,
    /// Assigned seat.
    pub position: Seat,
}

impl SeatPlacement {
    /// Creates a placement.
    pub fn new(student: Student, position: Seat) -> Self {
        Self { student, position }
    }
}
