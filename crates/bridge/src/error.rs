// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Failure reported by the email-delivery collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Email delivery failed: {message}")]
pub struct DeliveryError {
    /// The collaborator's description of what went wrong.
    pub message: String,
}

impl DeliveryError {
    /// Creates a delivery error from a collaborator message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by the local confirmation store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Confirmation store failed: {message}")]
pub struct StoreError {
    /// The store's description of what went wrong.
    pub message: String,
}

impl StoreError {
    /// Creates a store error from a collaborator message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors a submission attempt can surface to the user.
///
/// Submission never mutates the draft, so every variant leaves a retry
/// cheap: the user re-triggers the same action. Every variant also means
/// no email went out; once the send succeeds the submission completes,
/// whatever happens to the local confirmation write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The email collaborator rejected or failed the send.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// The draft reached the bridge without a selected date. The wizard
    /// validates the date on step 1, so this indicates a caller skipping
    /// the state machine.
    #[error("Cannot submit a draft without a selected date")]
    MissingDate,
}
