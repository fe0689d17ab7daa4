// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use andino_domain::ReservationDraft;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The three opaque identifiers the email collaborator needs. These are
/// configuration; the bridge passes them through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailServiceConfig {
    /// The delivery service identifier.
    pub service_id: String,
    /// The template identifier.
    pub template_id: String,
    /// The public API key.
    pub public_key: String,
}

/// One templated-email send: the service identifiers plus a flat string
/// map of template variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    /// The delivery service identifier.
    pub service_id: String,
    /// The template identifier.
    pub template_id: String,
    /// The public API key.
    pub public_key: String,
    /// Template variables, keyed by template field name.
    pub fields: BTreeMap<String, String>,
}

impl EmailPayload {
    /// Builds the payload for one reservation.
    ///
    /// The date is formatted `DD/MM/YYYY`, matching the email template.
    #[must_use]
    pub fn for_reservation(
        config: &EmailServiceConfig,
        draft: &ReservationDraft,
        tour_name: &str,
        date: NaiveDate,
    ) -> Self {
        let mut fields: BTreeMap<String, String> = BTreeMap::new();
        fields.insert(String::from("tour"), String::from(tour_name));
        fields.insert(String::from("nombre"), draft.contact_name.clone());
        fields.insert(String::from("correo"), draft.contact_email.clone());
        fields.insert(String::from("telefono"), draft.contact_phone.clone());
        fields.insert(
            String::from("fecha"),
            date.format("%d/%m/%Y").to_string(),
        );
        fields.insert(String::from("adultos"), draft.adult_count.to_string());
        fields.insert(String::from("ninos"), draft.child_count.to_string());
        fields.insert(
            String::from("contacto_emergencia"),
            draft.emergency_contact.name.clone(),
        );
        fields.insert(
            String::from("telefono_emergencia"),
            draft.emergency_contact.phone.clone(),
        );

        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            fields,
        }
    }

    /// One template variable, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
