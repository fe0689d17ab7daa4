// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use andino_wizard::CoreError;
use chrono::NaiveDate;

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Per-field validation problems are not errors at this layer:
/// they travel back inside the wizard view as the error map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No session exists for the given identifier.
    SessionNotFound {
        /// The identifier that was looked up.
        session_id: String,
    },
    /// The requested date is not in the tour's availability list.
    DateNotAvailable {
        /// The rejected date.
        date: NaiveDate,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The action is not allowed in the session's current stage.
    NotAllowed {
        /// A human-readable description of the rejection.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// A human-readable description of the violation.
        message: String,
    },
    /// The submission hand-off failed; the session is back on the last
    /// step and the user may retry.
    SubmissionFailed {
        /// The collaborator's failure description.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionNotFound { session_id } => {
                write!(f, "No reservation session with id {session_id}")
            }
            Self::DateNotAvailable { date } => {
                write!(f, "Date {date} is not available for this tour")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::NotAllowed { message } => write!(f, "Not allowed: {message}"),
            Self::DomainRuleViolation { message } => {
                write!(f, "Domain rule violation: {message}")
            }
            Self::SubmissionFailed { message } => {
                write!(f, "Submission failed: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CommandNotAllowed { .. } => Self::NotAllowed {
                message: err.to_string(),
            },
            CoreError::DomainViolation(domain) => Self::DomainRuleViolation {
                message: domain.to_string(),
            },
        }
    }
}
