// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Keeps the participant record lists index-aligned with their counts.
//!
//! Policy: shrink discards, grow re-creates empty. Records whose index
//! survives a resize keep their entered data; records dropped by a shrink
//! are gone even if the count grows back afterwards.

use andino_domain::{ParticipantKind, PersonRecord, ReservationDraft};

/// Resizes a record list to `new_count`, preserving existing records whose
/// index remains addressable and filling new slots with empty records.
pub fn resize_participants(records: &mut Vec<PersonRecord>, new_count: usize) {
    records.resize_with(new_count, PersonRecord::empty);
}

/// Sets the adult count and resizes the adult records in one operation, so
/// no caller ever observes `adults.len() != adult_count`.
pub fn resize_adults(draft: &mut ReservationDraft, new_count: u8) {
    resize_participants(&mut draft.adults, usize::from(new_count));
    draft.adult_count = new_count;
}

/// Sets the child count and resizes the child records in one operation.
pub fn resize_children(draft: &mut ReservationDraft, new_count: u8) {
    resize_participants(&mut draft.children, usize::from(new_count));
    draft.child_count = new_count;
}

/// Dispatches to the resizer for a participant category.
pub fn resize(draft: &mut ReservationDraft, kind: ParticipantKind, new_count: u8) {
    match kind {
        ParticipantKind::Adult => resize_adults(draft, new_count),
        ParticipantKind::Child => resize_children(draft, new_count),
    }
}
