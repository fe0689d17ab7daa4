// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seams to the external systems the wizard core depends on but does not
//! implement: templated email delivery, durable local confirmation storage,
//! and the tour-date availability source.

use crate::confirmation::ConfirmationRecord;
use crate::error::{DeliveryError, StoreError};
use crate::payload::EmailPayload;
use chrono::NaiveDate;

/// Sends one templated email from a flat key/value payload.
///
/// Implementations own transport, credentials handling, and any retries of
/// their own; the bridge awaits a single send and imposes no timeout.
pub trait EmailDelivery {
    /// Sends the payload through the delivery service.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the service rejects or fails the
    /// send.
    fn send(&self, payload: &EmailPayload) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Durable local storage for the most recent confirmation, written under
/// [`crate::CONFIRMATION_STORE_KEY`]. Other parts of the application read
/// it to show "your last reservation"; this core only writes.
pub trait ConfirmationStore {
    /// Persists the confirmation record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the record cannot be written.
    fn store(&self, record: &ConfirmationRecord) -> Result<(), StoreError>;
}

/// Supplies the dates a tour can currently be booked on.
///
/// The core reads this list to filter date selection; it never owns or
/// persists availability.
pub trait AvailabilityProvider {
    /// The dates currently open for booking, in ascending order.
    fn available_dates(&self) -> Vec<NaiveDate>;
}
