// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::phone::{is_valid_contact_phone, is_valid_emergency_phone};
use crate::types::{ParticipantKind, PersonRecord, ReservationDraft, Step};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field validation results for one wizard step.
///
/// A key's presence means that field has a problem; an empty map means the
/// step is valid. Validators never throw: this map is the whole result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// True when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Records an error message for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// The message for a field, if it has an error.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// True when the field has an error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterates over `(field, message)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Checks the shape of an email address: one `@`, no whitespace, and a dot
/// inside the domain with something on both sides of it. Equivalent to the
/// pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = raw.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // Any interior dot qualifies; a trailing dot does not disqualify an
    // earlier one ("ana@x.com." matches the pattern).
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Runs the validator for one step against the draft.
///
/// Validators are pure: they never mutate the draft and may be called any
/// number of times with the same result.
#[must_use]
pub fn validate_step(step: Step, draft: &ReservationDraft) -> FieldErrors {
    match step {
        Step::Contact => validate_contact_step(draft),
        Step::Counts => validate_count_step(draft),
        Step::Participants => validate_participants_step(draft),
        Step::Emergency => validate_emergency_step(draft),
    }
}

/// Step 1: contact name, email, country-coded phone, and a selected date.
///
/// The date check is presence-only. Whether the selected date is still in
/// the availability list is enforced at selection time by the caller, not
/// re-verified here.
#[must_use]
pub fn validate_contact_step(draft: &ReservationDraft) -> FieldErrors {
    let mut errors: FieldErrors = FieldErrors::new();

    if draft.contact_name.trim().is_empty() {
        errors.insert("nombre", "El nombre es obligatorio");
    }

    // The required check trims; the shape check does not, so padding
    // whitespace fails the same way it fails the pattern.
    let email: &str = draft.contact_email.as_str();
    if email.trim().is_empty() {
        errors.insert("correo", "El correo es obligatorio");
    } else if !is_valid_email(email) {
        errors.insert("correo", "Ingresa un correo electrónico válido");
    }

    let phone: &str = draft.contact_phone.trim();
    if phone.is_empty() {
        errors.insert("telefono", "El teléfono es obligatorio");
    } else if !is_valid_contact_phone(phone) {
        errors.insert(
            "telefono",
            "Ingresa un teléfono válido con indicativo de país",
        );
    }

    if draft.selected_date.is_none() {
        errors.insert("fecha", "Selecciona una fecha para el tour");
    }

    errors
}

/// Step 2: at least one adult. The upper bound of 10 per category is owned
/// by the count widget and is intentionally not re-checked here.
#[must_use]
pub fn validate_count_step(draft: &ReservationDraft) -> FieldErrors {
    let mut errors: FieldErrors = FieldErrors::new();

    if draft.adult_count < 1 {
        errors.insert("adultos", "Debe haber al menos un adulto");
    }
    // child_count is unsigned, so the >= 0 rule holds by type.

    errors
}

/// Step 3: every in-scope participant record must be complete. Errors are
/// keyed per index (`adult0name`, `child1documentNumber`, ...) so the UI
/// can attach each message to its row.
#[must_use]
pub fn validate_participants_step(draft: &ReservationDraft) -> FieldErrors {
    let mut errors: FieldErrors = FieldErrors::new();
    collect_participant_errors(&mut errors, ParticipantKind::Adult, &draft.adults);
    collect_participant_errors(&mut errors, ParticipantKind::Child, &draft.children);
    errors
}

fn collect_participant_errors(
    errors: &mut FieldErrors,
    kind: ParticipantKind,
    records: &[PersonRecord],
) {
    let prefix: &str = kind.key_prefix();
    let label: &str = kind.label();
    for (index, record) in records.iter().enumerate() {
        let row: usize = index + 1;
        if record.name.trim().is_empty() {
            errors.insert(
                format!("{prefix}{index}name"),
                format!("Ingresa el nombre del {label} {row}"),
            );
        }
        if record.document_type.is_none() {
            errors.insert(
                format!("{prefix}{index}documentType"),
                format!("Selecciona el tipo de documento del {label} {row}"),
            );
        }
        if record.document_number.trim().is_empty() {
            errors.insert(
                format!("{prefix}{index}documentNumber"),
                format!("Ingresa el número de documento del {label} {row}"),
            );
        }
    }
}

/// Step 4: emergency contact name and phone. The phone accepts a bare
/// 7–15 digit string or a country-coded composite; unlike step 1, the dial
/// code is not checked against the country table. Production behaves this
/// way, so this validator does too.
#[must_use]
pub fn validate_emergency_step(draft: &ReservationDraft) -> FieldErrors {
    let mut errors: FieldErrors = FieldErrors::new();

    if draft.emergency_contact.name.trim().is_empty() {
        errors.insert(
            "emergencyName",
            "Ingresa el nombre del contacto de emergencia",
        );
    }

    let phone: &str = draft.emergency_contact.phone.trim();
    if phone.is_empty() {
        errors.insert("emergencyPhone", "Ingresa el teléfono de emergencia");
    } else if !is_valid_emergency_phone(phone) {
        errors.insert(
            "emergencyPhone",
            "Ingresa un teléfono de emergencia válido",
        );
    }

    errors
}
