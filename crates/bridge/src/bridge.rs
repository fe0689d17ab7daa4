// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collaborators::{ConfirmationStore, EmailDelivery};
use crate::confirmation::ConfirmationRecord;
use crate::error::SubmissionError;
use crate::message::build_handoff_message;
use crate::payload::{EmailPayload, EmailServiceConfig};
use andino_domain::ReservationDraft;
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

/// The tour a wizard session books, with the per-person prices used to
/// compute the confirmation amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourInfo {
    /// The tour's display name.
    pub name: String,
    /// Price per adult, in the tour's currency unit.
    pub adult_price: u64,
    /// Price per child, in the tour's currency unit.
    pub child_price: u64,
}

impl TourInfo {
    /// The total amount for a party.
    #[must_use]
    pub fn total_for(&self, adults: u8, children: u8) -> u64 {
        self.adult_price * u64::from(adults) + self.child_price * u64::from(children)
    }
}

/// What a successful submission hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// The record persisted to the local confirmation store.
    pub record: ConfirmationRecord,
    /// The hand-off summary, identical to the text behind the deep link.
    pub handoff_message: String,
}

/// Hands a completed draft to the email collaborator and, on success,
/// persists a local confirmation and formats the messaging hand-off.
///
/// `submit` only reads the draft; a failed attempt leaves everything as it
/// was, so retrying is a plain re-trigger of the same call.
#[derive(Debug, Clone)]
pub struct SubmissionBridge<E, S> {
    email: E,
    store: S,
    config: EmailServiceConfig,
    tour: TourInfo,
}

impl<E: EmailDelivery, S: ConfirmationStore> SubmissionBridge<E, S> {
    /// Creates a bridge for one tour.
    pub const fn new(email: E, store: S, config: EmailServiceConfig, tour: TourInfo) -> Self {
        Self {
            email,
            store,
            config,
            tour,
        }
    }

    /// The tour this bridge submits reservations for.
    #[must_use]
    pub const fn tour(&self) -> &TourInfo {
        &self.tour
    }

    /// Submits one completed draft.
    ///
    /// The email send is awaited with no timeout; it is not retried here.
    /// Once the email has gone out the submission is committed: a failure
    /// writing the local confirmation is logged, not surfaced, so a retry
    /// can never re-send the reservation email.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::MissingDate`] if the draft has no
    /// selected date (the wizard validates this on step 1, so hitting it
    /// means the caller bypassed the state machine), and a delivery error
    /// when the email collaborator fails.
    pub async fn submit(&self, draft: &ReservationDraft) -> Result<Confirmation, SubmissionError> {
        let date: NaiveDate = draft.selected_date.ok_or(SubmissionError::MissingDate)?;

        let payload: EmailPayload =
            EmailPayload::for_reservation(&self.config, draft, &self.tour.name, date);

        if let Err(err) = self.email.send(&payload).await {
            warn!(tour = %self.tour.name, error = %err, "reservation email failed");
            return Err(err.into());
        }

        let record: ConfirmationRecord = ConfirmationRecord {
            tour_name: self.tour.name.clone(),
            date: date.format("%d/%m/%Y").to_string(),
            amount: self.tour.total_for(draft.adult_count, draft.child_count),
            reference: new_reference(),
            email: draft.contact_email.clone(),
        };
        if let Err(err) = self.store.store(&record) {
            warn!(
                tour = %self.tour.name,
                reference = %record.reference,
                error = %err,
                "confirmation store failed"
            );
        }

        info!(
            tour = %self.tour.name,
            reference = %record.reference,
            "reservation submitted"
        );

        Ok(Confirmation {
            handoff_message: build_handoff_message(draft, &self.tour.name),
            record,
        })
    }
}

/// A timestamp-based reservation reference.
fn new_reference() -> String {
    format!("RES-{}", Utc::now().timestamp_millis())
}
