// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Stage, WizardState};
use andino_domain::{DocumentType, EmergencyContact, PersonRecord, ReservationDraft};
use chrono::NaiveDate;

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
}

pub fn complete_person(name: &str, document_type: DocumentType, number: &str) -> PersonRecord {
    PersonRecord {
        name: String::from(name),
        document_type: Some(document_type),
        document_number: String::from(number),
    }
}

/// A draft that passes step 1.
pub fn contact_complete_draft() -> ReservationDraft {
    let mut draft: ReservationDraft = ReservationDraft::new();
    draft.contact_name = String::from("Ana Gomez");
    draft.contact_email = String::from("ana@x.com");
    draft.contact_phone = String::from("+57 3001234567");
    draft.selected_date = Some(test_date());
    draft
}

/// A draft that passes all four steps: two adults, one child, emergency
/// contact filled in.
pub fn fully_complete_draft() -> ReservationDraft {
    let mut draft: ReservationDraft = contact_complete_draft();
    draft.adult_count = 2;
    draft.adults = vec![
        complete_person("Ana Gomez", DocumentType::Cedula, "1020304050"),
        complete_person("Luis Rojas", DocumentType::Pasaporte, "AB123456"),
    ];
    draft.child_count = 1;
    draft.children = vec![complete_person(
        "Sofia Gomez",
        DocumentType::RegistroCivil,
        "445566",
    )];
    draft.emergency_contact = EmergencyContact {
        name: String::from("Marta Diaz"),
        phone: String::from("3009876543"),
    };
    draft
}

pub fn state_at(stage: Stage, draft: ReservationDraft) -> WizardState {
    let mut state: WizardState = WizardState::new();
    state.stage = stage;
    state.draft = draft;
    state
}
