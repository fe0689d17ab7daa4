// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Stage;
use andino_domain::DomainError;

/// Errors that can occur during state transitions.
///
/// Validation failures are not errors: a blocked advance is a successful
/// transition that records field errors and keeps the stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The command is not legal in the session's current stage, e.g. an
    /// edit while the submission is in flight.
    CommandNotAllowed {
        /// The rejected command's name.
        command: &'static str,
        /// The stage the session was in.
        stage: Stage,
    },
    /// A domain rule was violated while applying an edit.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandNotAllowed { command, stage } => {
                write!(f, "Command {command} is not allowed in stage {stage}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
