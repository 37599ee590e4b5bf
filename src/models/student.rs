//! Student model.
//!
//! Students are the entities being seated. The identifier is opaque and
//! caller-supplied; front ends typically send row numbers from an imported
//! roster, but any string key is accepted as well.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, caller-supplied student identifier.
///
/// Accepts either a JSON integer or a JSON string and serializes back to
/// the same form. The derived ordering is used to canonicalize relation
/// pairs, so it only has to be total and stable, not meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    /// Numeric identifier (e.g. roster row number).
    Number(i64),
    /// Free-form identifier.
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Number(n) => write!(f, "{n}"),
            StudentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StudentId {
    fn from(n: i64) -> Self {
        StudentId::Number(n)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        StudentId::Text(s.to_string())
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        StudentId::Text(s)
    }
}

/// A student to be seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: StudentId,
    /// Display name (what the seat chart prints).
    pub name: String,
}

impl Student {
    /// Creates a new student.
    pub fn new(id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
