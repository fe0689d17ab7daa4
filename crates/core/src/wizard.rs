// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::WizardCommand;
use crate::error::CoreError;
use crate::state::{Effect, Stage, TransitionResult, WizardState};
use andino_domain::{
    ContactField, EmergencyField, FieldErrors, ParticipantKind, PersonField, ReservationDraft,
};
use chrono::NaiveDate;

/// Owns one session's [`WizardState`] and applies commands to it.
///
/// This is a thin mutable facade over the pure [`apply`] function: every
/// method routes through it, so a failed command leaves the state exactly
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    /// Creates a controller for a fresh booking flow.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
        }
    }

    /// Resumes a controller from an existing state.
    #[must_use]
    pub const fn from_state(state: WizardState) -> Self {
        Self { state }
    }

    /// The current session state.
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// The current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.state.stage
    }

    /// The in-progress draft.
    #[must_use]
    pub const fn draft(&self) -> &ReservationDraft {
        &self.state.draft
    }

    /// Errors from the most recent failed advance attempt.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    /// Applies a command, replacing the held state on success.
    ///
    /// # Errors
    ///
    /// Propagates any [`CoreError`] from [`apply`]; the state is unchanged
    /// in that case.
    pub fn dispatch(&mut self, command: WizardCommand) -> Result<Option<Effect>, CoreError> {
        let result: TransitionResult = apply(&self.state, command)?;
        self.state = result.new_state;
        Ok(result.effect)
    }

    /// Validates the current step and moves forward when clean.
    ///
    /// Returns `Some(Effect::RequestSubmission)` when the advance left the
    /// last step; the caller must then run the submission bridge and report
    /// the outcome back.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn advance(&mut self) -> Result<Option<Effect>, CoreError> {
        self.dispatch(WizardCommand::Advance)
    }

    /// Moves one step back, clamped at step 1.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn retreat(&mut self) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::Retreat).map(|_| ())
    }

    /// Sets one of the step-1 contact fields.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn update_contact(&mut self, field: ContactField, value: String) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::UpdateContact { field, value })
            .map(|_| ())
    }

    /// Sets the selected tour date.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::SelectDate { date }).map(|_| ())
    }

    /// Clears the selected tour date.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn clear_date(&mut self) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::ClearDate).map(|_| ())
    }

    /// Changes a participant count, resizing its record list atomically.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn update_count(&mut self, kind: ParticipantKind, count: u8) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::UpdateCount { kind, count })
            .map(|_| ())
    }

    /// Sets one field of one participant record.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage or the
    /// value violates a domain rule.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of bounds; see [`apply`].
    pub fn update_person(
        &mut self,
        kind: ParticipantKind,
        index: usize,
        field: PersonField,
        value: String,
    ) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::UpdatePerson {
            kind,
            index,
            field,
            value,
        })
        .map(|_| ())
    }

    /// Sets one field of the emergency contact.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn update_emergency(
        &mut self,
        field: EmergencyField,
        value: String,
    ) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::UpdateEmergency { field, value })
            .map(|_| ())
    }

    /// Reports a successful submission hand-off.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in `Submitting`.
    pub fn submission_succeeded(&mut self) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::SubmissionSucceeded).map(|_| ())
    }

    /// Reports a failed submission hand-off; the session returns to the
    /// last step so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in `Submitting`.
    pub fn submission_failed(&mut self) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::SubmissionFailed).map(|_| ())
    }

    /// Returns from the success screen to step 1 with the draft retained.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in `Success`.
    pub fn edit_after_success(&mut self) -> Result<(), CoreError> {
        self.dispatch(WizardCommand::EditAfterSuccess).map(|_| ())
    }
}
