// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry field selectors as plain strings and are parsed at the
//! boundary; responses snapshot the whole wizard so the presenting UI can
//! render any step from one payload.

use andino_bridge::ConfirmationRecord;
use andino_domain::{FieldErrors, ReservationDraft};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API response for a newly started reservation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartReservationResponse {
    /// The session identifier for subsequent calls.
    pub session_id: String,
    /// The dates currently open for booking.
    pub available_dates: Vec<NaiveDate>,
    /// The initial wizard snapshot.
    pub view: WizardView,
}

/// API request to set one step-1 contact field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    /// The contact field name: `name`, `email`, or `phone`.
    pub field: String,
    /// The new value.
    pub value: String,
}

/// API request to select a tour date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectDateRequest {
    /// The chosen date (ISO 8601). `null` clears the selection.
    pub date: Option<NaiveDate>,
}

/// API request to change a participant count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCountRequest {
    /// The participant category: `adults` or `children`.
    pub kind: String,
    /// The new count. The selection widget caps this at 10; the API
    /// forwards whatever it is given.
    pub count: u8,
}

/// API request to set one field of one participant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePersonRequest {
    /// The participant category: `adults` or `children`.
    pub kind: String,
    /// The record index within the category.
    pub index: usize,
    /// The field name: `name`, `documentType`, or `documentNumber`.
    pub field: String,
    /// The new value.
    pub value: String,
}

/// API request to set one emergency-contact field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmergencyRequest {
    /// The field name: `name` or `phone`.
    pub field: String,
    /// The new value.
    pub value: String,
}

/// A full snapshot of one wizard session, returned by every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    /// The current stage name.
    pub stage: String,
    /// The 1-based step number while editing, `null` otherwise.
    pub step: Option<u8>,
    /// Field errors from the most recent failed advance attempt.
    pub errors: FieldErrors,
    /// The in-progress draft.
    pub draft: ReservationDraft,
    /// True once the submission has gone through.
    pub submitted: bool,
    /// The persisted confirmation, present in `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<ConfirmationRecord>,
    /// The messaging deep link, present in `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handoff_link: Option<String>,
}
