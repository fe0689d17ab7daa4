// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use andino_domain::{ContactField, EmergencyField, ParticipantKind, PersonField};
use chrono::NaiveDate;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to change a [`crate::WizardState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    /// Validate the current step and, if clean, move forward. From the
    /// last step a clean advance moves to `Submitting` instead.
    Advance,
    /// Move one step back, clamped at step 1. Never validates.
    Retreat,
    /// Set one of the step-1 contact fields.
    UpdateContact {
        /// The contact field to set.
        field: ContactField,
        /// The new value.
        value: String,
    },
    /// Set the selected tour date. Availability membership is the caller's
    /// concern at selection time.
    SelectDate {
        /// The chosen date.
        date: NaiveDate,
    },
    /// Clear the selected tour date.
    ClearDate,
    /// Change a participant count, resizing the matching record list in
    /// the same transition.
    UpdateCount {
        /// Which category to resize.
        kind: ParticipantKind,
        /// The new count.
        count: u8,
    },
    /// Set one field of one participant record.
    UpdatePerson {
        /// Which category the record belongs to.
        kind: ParticipantKind,
        /// The record index. Must be in bounds; an out-of-bounds index is
        /// a caller bug and panics.
        index: usize,
        /// The field to set.
        field: PersonField,
        /// The new value, in wire form.
        value: String,
    },
    /// Set one field of the emergency contact.
    UpdateEmergency {
        /// The field to set.
        field: EmergencyField,
        /// The new value.
        value: String,
    },
    /// Report that the submission hand-off succeeded.
    SubmissionSucceeded,
    /// Report that the submission hand-off failed; the session returns to
    /// the last step with the draft intact so the user can retry.
    SubmissionFailed,
    /// Return from the success screen to step 1, keeping the draft.
    EditAfterSuccess,
}

impl WizardCommand {
    /// A short name for log and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Advance => "Advance",
            Self::Retreat => "Retreat",
            Self::UpdateContact { .. } => "UpdateContact",
            Self::SelectDate { .. } => "SelectDate",
            Self::ClearDate => "ClearDate",
            Self::UpdateCount { .. } => "UpdateCount",
            Self::UpdatePerson { .. } => "UpdatePerson",
            Self::UpdateEmergency { .. } => "UpdateEmergency",
            Self::SubmissionSucceeded => "SubmissionSucceeded",
            Self::SubmissionFailed => "SubmissionFailed",
            Self::EditAfterSuccess => "EditAfterSuccess",
        }
    }
}
