// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, ApiResult};
use crate::request_response::{
    SelectDateRequest, UpdateContactRequest, UpdateCountRequest, UpdateEmergencyRequest,
    UpdatePersonRequest, WizardView,
};
use andino_bridge::{
    Confirmation, ConfirmationStore, EmailDelivery, SubmissionBridge, handoff_link,
};
use andino_domain::{
    ContactField, EmergencyField, ParticipantKind, PersonField, ReservationDraft,
};
use andino_wizard::{Effect, Stage, WizardController};
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// One booking flow: a wizard controller plus the collaborators it hands
/// off to when the state machine requests submission.
///
/// The session is the layer that enforces selection-time rules the pure
/// validators deliberately do not re-check: date availability membership
/// and participant-index bounds.
#[derive(Debug)]
pub struct ReservationSession<E, S> {
    controller: WizardController,
    bridge: SubmissionBridge<E, S>,
    available_dates: Vec<NaiveDate>,
    whatsapp_recipient: String,
    confirmation: Option<Confirmation>,
}

impl<E: EmailDelivery, S: ConfirmationStore> ReservationSession<E, S> {
    /// Starts a fresh booking flow.
    #[must_use]
    pub fn new(
        bridge: SubmissionBridge<E, S>,
        available_dates: Vec<NaiveDate>,
        whatsapp_recipient: String,
    ) -> Self {
        Self {
            controller: WizardController::new(),
            bridge,
            available_dates,
            whatsapp_recipient,
            confirmation: None,
        }
    }

    /// The dates currently open for booking.
    #[must_use]
    pub fn available_dates(&self) -> &[NaiveDate] {
        &self.available_dates
    }

    /// The current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.controller.stage()
    }

    /// The in-progress draft.
    #[must_use]
    pub const fn draft(&self) -> &ReservationDraft {
        self.controller.draft()
    }

    /// The confirmation from a successful submission, if any.
    #[must_use]
    pub const fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Snapshots the whole session for the presenting UI.
    #[must_use]
    pub fn view(&self) -> WizardView {
        let state = self.controller.state();
        let confirmation = self
            .confirmation
            .as_ref()
            .filter(|_| state.is_submitted());
        WizardView {
            stage: state.stage.as_str().to_string(),
            step: state.step_number(),
            errors: state.errors.clone(),
            draft: state.draft.clone(),
            submitted: state.is_submitted(),
            confirmation: confirmation.map(|c| c.record.clone()),
            handoff_link: confirmation
                .map(|c| handoff_link(&self.whatsapp_recipient, &c.handoff_message)),
        }
    }

    /// Sets one step-1 contact field.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown field name or when the session is
    /// not in an editing stage.
    pub fn apply_contact(&mut self, request: UpdateContactRequest) -> ApiResult<()> {
        let field: ContactField = parse_selector(&request.field, "field")?;
        self.controller.update_contact(field, request.value)?;
        Ok(())
    }

    /// Selects or clears the tour date.
    ///
    /// Unlike the step-1 validator, which only checks presence, selection
    /// is where availability membership is enforced: a date outside the
    /// availability list is rejected here, matching the picker UI.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DateNotAvailable`] for a date outside the
    /// availability list, or an error when the session is not editable.
    pub fn apply_date(&mut self, request: SelectDateRequest) -> ApiResult<()> {
        match request.date {
            Some(date) => {
                if !self.available_dates.contains(&date) {
                    return Err(ApiError::DateNotAvailable { date });
                }
                self.controller.select_date(date)?;
            }
            None => self.controller.clear_date()?,
        }
        Ok(())
    }

    /// Changes a participant count, resizing its record list atomically.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown category name or when the session
    /// is not in an editing stage.
    pub fn apply_count(&mut self, request: UpdateCountRequest) -> ApiResult<()> {
        let kind: ParticipantKind = parse_selector(&request.kind, "kind")?;
        self.controller.update_count(kind, request.count)?;
        Ok(())
    }

    /// Sets one field of one participant record.
    ///
    /// The index is bounds-checked here so a stray client cannot trip the
    /// state machine's contract assertion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] for an out-of-bounds index or
    /// unknown selector, and a domain error for a rejected document type.
    pub fn apply_person(&mut self, request: UpdatePersonRequest) -> ApiResult<()> {
        let kind: ParticipantKind = parse_selector(&request.kind, "kind")?;
        let field: PersonField = parse_selector(&request.field, "field")?;

        let len: usize = self.draft().participants(kind).len();
        if request.index >= len {
            return Err(ApiError::InvalidInput {
                field: String::from("index"),
                message: format!(
                    "index {} out of bounds for {} {} records",
                    request.index,
                    len,
                    kind.as_str()
                ),
            });
        }

        self.controller
            .update_person(kind, request.index, field, request.value)?;
        Ok(())
    }

    /// Sets one emergency-contact field.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown field name or when the session is
    /// not in an editing stage.
    pub fn apply_emergency(&mut self, request: UpdateEmergencyRequest) -> ApiResult<()> {
        let field: EmergencyField = parse_selector(&request.field, "field")?;
        self.controller.update_emergency(field, request.value)?;
        Ok(())
    }

    /// Validates the current step and moves forward.
    ///
    /// A blocked advance is not an error: the new view carries the field
    /// errors. When the advance leaves the last step the session runs the
    /// submission hand-off before returning; on delivery failure the
    /// machine is already back on the last step and the error is surfaced
    /// so the UI can show a notification.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SubmissionFailed`] when the hand-off fails,
    /// or a stage error when the session is not editable.
    pub async fn advance(&mut self) -> ApiResult<()> {
        let effect: Option<Effect> = self.controller.advance()?;
        match effect {
            None => Ok(()),
            Some(Effect::RequestSubmission) => self.run_submission().await,
        }
    }

    /// Moves one step back, clamped at step 1.
    ///
    /// # Errors
    ///
    /// Returns an error when the session is not in an editing stage.
    pub fn retreat(&mut self) -> ApiResult<()> {
        self.controller.retreat()?;
        Ok(())
    }

    /// Returns from the success screen to step 1 with the draft retained.
    ///
    /// # Errors
    ///
    /// Returns an error when the session has not submitted.
    pub fn edit_after_success(&mut self) -> ApiResult<()> {
        self.controller.edit_after_success()?;
        self.confirmation = None;
        Ok(())
    }

    async fn run_submission(&mut self) -> ApiResult<()> {
        debug!(stage = %self.stage(), "running submission hand-off");
        // The draft is frozen while Submitting; clone it for the await.
        let draft: ReservationDraft = self.draft().clone();
        match self.bridge.submit(&draft).await {
            Ok(confirmation) => {
                self.controller.submission_succeeded()?;
                info!(reference = %confirmation.record.reference, "reservation confirmed");
                self.confirmation = Some(confirmation);
                Ok(())
            }
            Err(err) => {
                self.controller.submission_failed()?;
                warn!(error = %err, "reservation submission failed");
                Err(ApiError::SubmissionFailed {
                    message: err.to_string(),
                })
            }
        }
    }
}

fn parse_selector<T>(value: &str, field: &str) -> ApiResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    T::from_str(value).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}
