//! Seating request payload.

use serde::{Deserialize, Serialize};

use crate::error::SeatingError;
use crate::models::{Relation, Student};

/// Input container for seat planning.
///
/// Wire form:
///
/// ```json
/// {
///   "students": [{"id": 1, "name": "Lin"}, {"id": 2, "name": "Mei"}],
///   "seats": ["0-0", "0-1", "1-0"],
///   "relations": [{"students": [1, 2], "type": "avoid"}]
/// }
/// ```
///
/// All three fields are required. Seat tokens stay as strings here; they
/// are parsed and checked by [`validate_input`](crate::validation::validate_input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatingRequest {
    /// Students to seat, in output order.
    pub students: Vec<Student>,
    /// Seat pool tokens (`"row-col"`).
    pub seats: Vec<String>,
    /// Avoid/prefer relations.
    pub relations: Vec<Relation>,
}

impl SeatingRequest {
    /// Creates a request without relations.
    pub fn new<S: Into<String>>(students: Vec<Student>, seats: impl IntoIterator<Item = S>) -> Self {
        Self {
            students,
            seats: seats.into_iter().map(Into::into).collect(),
            relations: Vec::new(),
        }
    }

    /// Adds a relation.
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    /// Adds relations.
    pub fn with_relations(mut self, relations: impl IntoIterator<Item = Relation>) -> Self {
        self.relations.extend(relations);
        self
    }

    /// Decodes a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, SeatingError> {
        Ok(serde_json::from_str(json)?)
    }
}
