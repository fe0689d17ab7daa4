// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::WizardCommand;
use crate::error::CoreError;
use crate::state::{Effect, Stage, TransitionResult, WizardState};
use crate::sync;
use andino_domain::{DomainError, DocumentType, FieldErrors, PersonField, Step, validate_step};

/// Applies a command to the state, producing the new state and an optional
/// side effect for the caller.
///
/// `apply` is pure: the input state is never mutated, and a returned error
/// means nothing changed.
///
/// # Errors
///
/// Returns [`CoreError::CommandNotAllowed`] when the command is not legal
/// in the current stage, and [`CoreError::DomainViolation`] when an edit
/// carries a value the domain rejects (e.g. an unknown document-type code).
///
/// # Panics
///
/// Panics if `UpdatePerson` names an index outside the current record list.
/// The synchronizer keeps lists and counts aligned, so an out-of-bounds
/// index can only come from a caller bug; failing loudly here beats
/// silently corrupting the length invariant.
pub fn apply(state: &WizardState, command: WizardCommand) -> Result<TransitionResult, CoreError> {
    match command {
        WizardCommand::Advance => apply_advance(state),
        WizardCommand::Retreat => apply_retreat(state),
        WizardCommand::SubmissionSucceeded => {
            require_stage(state, Stage::Submitting, "SubmissionSucceeded")?;
            let mut new_state: WizardState = state.clone();
            new_state.stage = Stage::Success;
            Ok(transition(new_state))
        }
        WizardCommand::SubmissionFailed => {
            require_stage(state, Stage::Submitting, "SubmissionFailed")?;
            // Back to the last interactive step; the draft is untouched so
            // a retry costs the user nothing.
            let mut new_state: WizardState = state.clone();
            new_state.stage = Stage::Emergency;
            Ok(transition(new_state))
        }
        WizardCommand::EditAfterSuccess => {
            require_stage(state, Stage::Success, "EditAfterSuccess")?;
            let mut new_state: WizardState = state.clone();
            new_state.stage = Stage::Contact;
            new_state.errors = FieldErrors::new();
            Ok(transition(new_state))
        }
        edit => apply_edit(state, edit),
    }
}

/// Runs the current step's validator and either records the errors or
/// moves forward. A clean advance from the last step enters `Submitting`
/// and asks the caller to perform the hand-off.
fn apply_advance(state: &WizardState) -> Result<TransitionResult, CoreError> {
    let step: Step = require_editing(state, "Advance")?;

    let errors: FieldErrors = validate_step(step, &state.draft);
    let mut new_state: WizardState = state.clone();

    if errors.is_empty() {
        new_state.errors = FieldErrors::new();
        match step.next() {
            Some(next) => {
                new_state.stage = Stage::from_step(next);
                Ok(transition(new_state))
            }
            None => {
                new_state.stage = Stage::Submitting;
                Ok(TransitionResult {
                    new_state,
                    effect: Some(Effect::RequestSubmission),
                })
            }
        }
    } else {
        new_state.errors = errors;
        Ok(transition(new_state))
    }
}

/// Moves one step back, clamped at step 1. Never validates and leaves the
/// error map alone, even when the current step is dirty.
fn apply_retreat(state: &WizardState) -> Result<TransitionResult, CoreError> {
    let step: Step = require_editing(state, "Retreat")?;

    let mut new_state: WizardState = state.clone();
    if let Some(previous) = step.previous() {
        new_state.stage = Stage::from_step(previous);
    }
    Ok(transition(new_state))
}

/// Applies a field edit. Edits never touch the error map; stale messages
/// stay visible until the next advance re-validates the step.
fn apply_edit(state: &WizardState, command: WizardCommand) -> Result<TransitionResult, CoreError> {
    require_editing(state, command.name())?;

    let mut new_state: WizardState = state.clone();
    match command {
        WizardCommand::UpdateContact { field, value } => {
            new_state.draft.set_contact_field(field, value);
        }
        WizardCommand::SelectDate { date } => {
            new_state.draft.selected_date = Some(date);
        }
        WizardCommand::ClearDate => {
            new_state.draft.selected_date = None;
        }
        WizardCommand::UpdateCount { kind, count } => {
            sync::resize(&mut new_state.draft, kind, count);
        }
        WizardCommand::UpdatePerson {
            kind,
            index,
            field,
            value,
        } => {
            let records = new_state.draft.participants_mut(kind);
            assert!(
                index < records.len(),
                "UpdatePerson index {index} out of bounds for {} {} records",
                records.len(),
                kind.as_str(),
            );
            if field == PersonField::DocumentType && !value.is_empty() {
                let document_type: DocumentType = value.parse()?;
                if !document_type.valid_for(kind) {
                    return Err(CoreError::DomainViolation(
                        DomainError::DocumentTypeNotAllowed {
                            code: value,
                            kind: kind.as_str().to_string(),
                        },
                    ));
                }
            }
            records[index].set_field(field, &value)?;
        }
        WizardCommand::UpdateEmergency { field, value } => {
            new_state.draft.emergency_contact.set_field(field, value);
        }
        // Advance/Retreat/submission commands are handled in `apply`.
        other => {
            return Err(CoreError::CommandNotAllowed {
                command: other.name(),
                stage: state.stage,
            });
        }
    }
    Ok(transition(new_state))
}

/// Returns the current step, or rejects the command when the session is
/// not in an editing stage (`Submitting` acts as a lock, `Success` only
/// accepts an explicit return to editing).
fn require_editing(state: &WizardState, command: &'static str) -> Result<Step, CoreError> {
    state.stage.step().ok_or(CoreError::CommandNotAllowed {
        command,
        stage: state.stage,
    })
}

fn require_stage(
    state: &WizardState,
    expected: Stage,
    command: &'static str,
) -> Result<(), CoreError> {
    if state.stage == expected {
        Ok(())
    } else {
        Err(CoreError::CommandNotAllowed {
            command,
            stage: state.stage,
        })
    }
}

const fn transition(new_state: WizardState) -> TransitionResult {
    TransitionResult {
        new_state,
        effect: None,
    }
}
