// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod phone;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use phone::{
    DEFAULT_MAX_DIGITS, DEFAULT_MIN_DIGITS, digit_range_for, is_valid_contact_phone,
    is_valid_emergency_phone, split_country_code,
};
pub use types::{
    ADULT_DOCUMENT_TYPES, ContactField, DocumentType, EmergencyContact, EmergencyField,
    MINOR_DOCUMENT_TYPES, ParticipantKind, PersonField, PersonRecord, ReservationDraft, Step,
};
pub use validation::{
    FieldErrors, is_valid_email, validate_contact_step, validate_count_step,
    validate_emergency_step, validate_participants_step, validate_step,
};
