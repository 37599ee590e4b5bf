//! Input validation and output verification for seating problems.
//!
//! Two distinct checkpoints:
//!
//! - [`validate_input`] runs before any search. It detects caller mistakes
//!   (too few seats, malformed seat tokens, duplicate student ids and, in
//!   strict mode, relations naming unknown students) and reports all of them.
//! - [`verify_assignment`] runs on the optimizer's final answer. A failure
//!   there is a defect in the search itself, never a caller mistake, and is
//!   reported as [`SeatingError::AlgorithmInvariant`].

use std::collections::HashSet;

use crate::error::SeatingError;
use crate::models::{
    ConstraintIndex, ParseSeatError, Relation, SeatAssignment, SeatPool, Student, StudentId,
};

/// Validation result.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer distinct seats than students.
    InsufficientSeats,
    /// A seat token is not a `"row-col"` integer pair.
    MalformedSeat,
    /// Two students share the same id.
    DuplicateStudentId,
    /// A relation names a student that is not in the student list.
    UnknownStudentReference,
    /// The seat chart spanning the pool has too many cells to lay out.
    GridTooLarge,
}

impl From<ParseSeatError> for ValidationError {
    fn from(e: ParseSeatError) -> Self {
        ValidationError::new(ValidationErrorKind::MalformedSeat, e.to_string())
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a seating request and builds its seat pool.
///
/// Checks:
/// 1. No duplicate student ids
/// 2. Every seat token parses as `"row-col"`
/// 3. Distinct seats ≥ students
/// 4. (`strict_relations` only) every relation names known students
///
/// Without `strict_relations`, relations naming unknown students pass and
/// are ignored during scoring.
///
/// # Returns
/// The deduplicated seat pool, or every detected issue.
pub fn validate_input<S: AsRef<str>>(
    students: &[Student],
    seats: &[S],
    relations: &[Relation],
    strict_relations: bool,
) -> ValidationResult<SeatPool> {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for student in students {
        if !ids.insert(&student.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStudentId,
                format!("Duplicate student ID: {}", student.id),
            ));
        }
    }

    let (pool, parse_errors) = SeatPool::parse_partial(seats);
    errors.extend(parse_errors.into_iter().map(ValidationError::from));

    if pool.len() < students.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientSeats,
            format!(
                "Not enough seats: {} students need seats, pool has {} distinct valid seats",
                students.len(),
                pool.len()
            ),
        ));
    }

    if strict_relations {
        let index = ConstraintIndex::from_relations(relations);
        for id in index.unknown_references(&ids) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownStudentReference,
                format!("Relation references unknown student '{id}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(pool)
    } else {
        Err(errors)
    }
}

/// Verifies the final assignment is a bijection onto pool seats.
///
/// Checks that every student has a seat, no seat is used twice and every
/// seat belongs to `pool`.
pub fn verify_assignment(
    assignment: &SeatAssignment,
    students: &[StudentId],
    pool: &SeatPool,
) -> Result<(), SeatingError> {
    if let Some(seat) = assignment.seats().find(|s| !pool.contains(s)) {
        return Err(SeatingError::AlgorithmInvariant(format!(
            "assigned seat {seat} is not in the seat pool"
        )));
    }
    if let Some(missing) = students.iter().find(|id| assignment.seat_of(id).is_none()) {
        return Err(SeatingError::AlgorithmInvariant(format!(
            "student {missing} has no seat"
        )));
    }
    if assignment.distinct_seat_count() != assignment.len() {
        return Err(SeatingError::AlgorithmInvariant(
            "a seat is assigned to more than one student".into(),
        ));
    }
    Ok(())
}
