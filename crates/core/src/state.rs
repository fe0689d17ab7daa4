// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use andino_domain::{FieldErrors, ReservationDraft, Step};

/// Where one booking session currently is.
///
/// The first four stages are the interactive wizard steps. `Submitting`
/// covers the awaited email-delivery call and acts as a lock: no edits or
/// navigation are accepted while in it. `Success` is terminal until the
/// user explicitly returns to editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Editing step 1 (contact details and date).
    Contact,
    /// Editing step 2 (participant counts).
    Counts,
    /// Editing step 3 (participant records).
    Participants,
    /// Editing step 4 (emergency contact).
    Emergency,
    /// The submission hand-off is in flight.
    Submitting,
    /// The submission succeeded.
    Success,
}

impl Stage {
    /// The wizard step this stage edits, if it is an editing stage.
    #[must_use]
    pub const fn step(&self) -> Option<Step> {
        match self {
            Self::Contact => Some(Step::Contact),
            Self::Counts => Some(Step::Counts),
            Self::Participants => Some(Step::Participants),
            Self::Emergency => Some(Step::Emergency),
            Self::Submitting | Self::Success => None,
        }
    }

    /// The stage that edits a given step.
    #[must_use]
    pub const fn from_step(step: Step) -> Self {
        match step {
            Step::Contact => Self::Contact,
            Step::Counts => Self::Counts,
            Step::Participants => Self::Participants,
            Step::Emergency => Self::Emergency,
        }
    }

    /// True while the draft may be edited and the user may navigate.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.step().is_some()
    }

    /// A short name for log and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Counts => "counts",
            Self::Participants => "participants",
            Self::Emergency => "emergency",
            Self::Submitting => "submitting",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete state of one reservation wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// The current stage.
    pub stage: Stage,
    /// Validation errors from the most recent failed advance attempt.
    /// Field edits deliberately leave this untouched; stale messages stay
    /// visible until the next advance re-validates the step.
    pub errors: FieldErrors,
    /// The in-progress reservation data.
    pub draft: ReservationDraft,
}

impl WizardState {
    /// Creates the state a fresh booking flow starts in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: Stage::Contact,
            errors: FieldErrors::new(),
            draft: ReservationDraft::new(),
        }
    }

    /// The 1-based step number while editing, `None` otherwise.
    #[must_use]
    pub const fn step_number(&self) -> Option<u8> {
        match self.stage.step() {
            Some(step) => Some(step.number()),
            None => None,
        }
    }

    /// True once the submission has gone through.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.stage == Stage::Success
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// A side effect the caller must perform after a transition.
///
/// The state machine itself never talks to collaborators; it only signals
/// that the caller should.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Hand the frozen draft to the submission bridge. Produced exactly
    /// when a valid advance leaves the last step.
    RequestSubmission,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WizardState,
    /// A side effect the caller must carry out, if any.
    pub effect: Option<Effect>,
}
