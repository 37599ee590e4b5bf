//! Top-level error type.

use crate::ga::ConfigError;
use crate::validation::ValidationError;

/// Errors surfaced by [`SeatPlanner`](crate::planner::SeatPlanner).
///
/// Client errors (bad payload, bad input) are kept apart from server errors
/// (misconfiguration, algorithm defects) so a transport layer can map them
/// to different status classes.
#[derive(Debug, thiserror::Error)]
pub enum SeatingError {
    /// The request failed input validation. Contains every detected issue.
    #[error("invalid seating request: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The request payload could not be decoded.
    #[error("malformed request payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The optimizer configuration is unusable.
    #[error("invalid optimizer configuration: {0}")]
    Config(#[from] ConfigError),

    /// The optimizer produced an assignment that breaks its own invariants.
    #[error("seat assignment invariant violated: {0}")]
    AlgorithmInvariant(String),
}

impl SeatingError {
    /// Whether the caller caused this error (4xx) as opposed to the service (5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, SeatingError::Validation(_) | SeatingError::Payload(_))
    }
}

impl From<Vec<ValidationError>> for SeatingError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SeatingError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
