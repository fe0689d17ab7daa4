// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The fixed key the confirmation record is stored under. The "your last
/// reservation" screen elsewhere in the application reads this key.
pub const CONFIRMATION_STORE_KEY: &str = "ultimaReserva";

/// The lightweight local record persisted after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRecord {
    /// The booked tour's name.
    pub tour_name: String,
    /// The tour date, formatted `DD/MM/YYYY`.
    pub date: String,
    /// The total amount, in the tour's currency unit.
    pub amount: u64,
    /// A timestamp-based reservation reference, e.g. `RES-1767225600000`.
    pub reference: String,
    /// The contact email the confirmation was sent to.
    pub email: String,
}
