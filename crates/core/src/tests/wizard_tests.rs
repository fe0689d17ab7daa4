// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::test_date;
use crate::{CoreError, Effect, Stage, WizardController};
use andino_domain::{
    ContactField, DocumentType, EmergencyField, ParticipantKind, PersonField,
};

/// Drives a controller through the full happy path up to the hand-off.
fn fill_and_advance_to_submission(controller: &mut WizardController) -> Option<Effect> {
    controller
        .update_contact(ContactField::Name, String::from("Ana Gomez"))
        .unwrap();
    controller
        .update_contact(ContactField::Email, String::from("ana@x.com"))
        .unwrap();
    controller
        .update_contact(ContactField::Phone, String::from("+57 3001234567"))
        .unwrap();
    controller.select_date(test_date()).unwrap();
    assert_eq!(controller.advance().unwrap(), None);
    assert_eq!(controller.stage(), Stage::Counts);

    controller.update_count(ParticipantKind::Adult, 2).unwrap();
    controller.update_count(ParticipantKind::Child, 1).unwrap();
    assert_eq!(controller.advance().unwrap(), None);
    assert_eq!(controller.stage(), Stage::Participants);

    let people: [(ParticipantKind, usize, &str, &str, &str); 3] = [
        (ParticipantKind::Adult, 0, "Ana Gomez", "CC", "1020304050"),
        (ParticipantKind::Adult, 1, "Luis Rojas", "PA", "AB123456"),
        (ParticipantKind::Child, 0, "Sofia Gomez", "RC", "445566"),
    ];
    for (kind, index, name, doc, number) in people {
        controller
            .update_person(kind, index, PersonField::Name, String::from(name))
            .unwrap();
        controller
            .update_person(kind, index, PersonField::DocumentType, String::from(doc))
            .unwrap();
        controller
            .update_person(kind, index, PersonField::DocumentNumber, String::from(number))
            .unwrap();
    }
    assert_eq!(controller.advance().unwrap(), None);
    assert_eq!(controller.stage(), Stage::Emergency);

    controller
        .update_emergency(EmergencyField::Name, String::from("Marta Diaz"))
        .unwrap();
    controller
        .update_emergency(EmergencyField::Phone, String::from("3009876543"))
        .unwrap();
    controller.advance().unwrap()
}

#[test]
fn test_full_wizard_walkthrough_requests_submission() {
    let mut controller: WizardController = WizardController::new();

    let effect: Option<Effect> = fill_and_advance_to_submission(&mut controller);

    assert_eq!(effect, Some(Effect::RequestSubmission));
    assert_eq!(controller.stage(), Stage::Submitting);
    assert_eq!(controller.draft().adults.len(), 2);
    assert_eq!(controller.draft().children.len(), 1);
}

#[test]
fn test_success_then_edit_round_trip_keeps_draft() {
    let mut controller: WizardController = WizardController::new();
    fill_and_advance_to_submission(&mut controller);

    controller.submission_succeeded().unwrap();
    assert_eq!(controller.stage(), Stage::Success);
    assert!(controller.state().is_submitted());

    controller.edit_after_success().unwrap();
    assert_eq!(controller.stage(), Stage::Contact);
    assert!(!controller.state().is_submitted());
    assert_eq!(controller.draft().contact_name, "Ana Gomez");
    assert_eq!(controller.draft().adults.len(), 2);
}

#[test]
fn test_failed_submission_allows_manual_retry() {
    let mut controller: WizardController = WizardController::new();
    fill_and_advance_to_submission(&mut controller);

    controller.submission_failed().unwrap();
    assert_eq!(controller.stage(), Stage::Emergency);

    // Clicking submit again re-enters Submitting with the same draft.
    let effect: Option<Effect> = controller.advance().unwrap();
    assert_eq!(effect, Some(Effect::RequestSubmission));
    assert_eq!(controller.stage(), Stage::Submitting);
}

#[test]
fn test_failed_dispatch_leaves_state_unchanged() {
    let mut controller: WizardController = WizardController::new();
    let before = controller.state().clone();

    let result: Result<(), CoreError> = controller.submission_succeeded();

    assert!(result.is_err());
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_retreat_walks_back_to_step_one() {
    let mut controller: WizardController = WizardController::new();
    controller
        .update_contact(ContactField::Name, String::from("Ana Gomez"))
        .unwrap();
    controller
        .update_contact(ContactField::Email, String::from("ana@x.com"))
        .unwrap();
    controller
        .update_contact(ContactField::Phone, String::from("+57 3001234567"))
        .unwrap();
    controller.select_date(test_date()).unwrap();
    controller.advance().unwrap();
    assert_eq!(controller.stage(), Stage::Counts);

    controller.retreat().unwrap();
    assert_eq!(controller.stage(), Stage::Contact);
    controller.retreat().unwrap();
    assert_eq!(controller.stage(), Stage::Contact);
}

#[test]
fn test_blocked_advance_records_row_errors() {
    let mut controller: WizardController = WizardController::new();
    controller
        .update_contact(ContactField::Name, String::from("Ana Gomez"))
        .unwrap();
    controller
        .update_contact(ContactField::Email, String::from("ana@x.com"))
        .unwrap();
    controller
        .update_contact(ContactField::Phone, String::from("+57 3001234567"))
        .unwrap();
    controller.select_date(test_date()).unwrap();
    controller.advance().unwrap();
    controller.advance().unwrap();
    assert_eq!(controller.stage(), Stage::Participants);

    // The single default adult record is empty, so the advance is blocked.
    controller.advance().unwrap();
    assert_eq!(controller.stage(), Stage::Participants);
    assert!(controller.errors().contains("adult0name"));
    assert!(controller.errors().contains("adult0documentType"));
    assert!(controller.errors().contains("adult0documentNumber"));
}

#[test]
fn test_minor_document_type_accepted_for_child_row() {
    let mut controller: WizardController = WizardController::new();
    controller.update_count(ParticipantKind::Child, 1).unwrap();

    controller
        .update_person(
            ParticipantKind::Child,
            0,
            PersonField::DocumentType,
            String::from("TI"),
        )
        .unwrap();

    assert_eq!(
        controller.draft().children[0].document_type,
        Some(DocumentType::TarjetaIdentidad)
    );
}
