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

mod bridge;
mod collaborators;
mod confirmation;
mod error;
mod message;
mod payload;

pub use bridge::{Confirmation, SubmissionBridge, TourInfo};
pub use collaborators::{AvailabilityProvider, ConfirmationStore, EmailDelivery};
pub use confirmation::{CONFIRMATION_STORE_KEY, ConfirmationRecord};
pub use error::{DeliveryError, StoreError, SubmissionError};
pub use message::{build_handoff_message, handoff_link};
pub use payload::{EmailPayload, EmailServiceConfig};
