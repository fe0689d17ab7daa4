// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Builds the human-readable hand-off summary and its messaging deep link.
//!
//! The same text backs both the on-screen summary and the deep link, so
//! the builder must be deterministic for a given draft.

use andino_domain::{PersonRecord, ReservationDraft};
use std::fmt::Write as _;

/// Formats the emoji-sectioned reservation summary.
///
/// Participants are listed adults first, then children, each in input
/// order, one numbered line per person.
#[must_use]
pub fn build_handoff_message(draft: &ReservationDraft, tour_name: &str) -> String {
    let mut message: String = String::new();

    let _ = writeln!(message, "🏔️ *Nueva reserva - {tour_name}*");
    let _ = writeln!(message);
    let _ = writeln!(message, "👤 *Contacto*");
    let _ = writeln!(message, "Nombre: {}", draft.contact_name);
    let _ = writeln!(message, "Correo: {}", draft.contact_email);
    let _ = writeln!(message, "Teléfono: {}", draft.contact_phone);
    let fecha: String = draft
        .selected_date
        .map_or_else(|| String::from("Sin definir"), |d| d.format("%d/%m/%Y").to_string());
    let _ = writeln!(message, "📅 Fecha: {fecha}");
    let _ = writeln!(message);
    let _ = writeln!(
        message,
        "👥 *Participantes* ({} adultos, {} niños)",
        draft.adult_count, draft.child_count
    );
    push_participant_lines(&mut message, "Adultos", &draft.adults);
    push_participant_lines(&mut message, "Niños", &draft.children);
    let _ = writeln!(message);
    let _ = writeln!(message, "🚨 *Contacto de emergencia*");
    let _ = write!(
        message,
        "{} - {}",
        draft.emergency_contact.name, draft.emergency_contact.phone
    );

    message
}

fn push_participant_lines(message: &mut String, heading: &str, records: &[PersonRecord]) {
    if records.is_empty() {
        return;
    }
    let _ = writeln!(message, "{heading}:");
    for (index, record) in records.iter().enumerate() {
        let code: &str = record.document_type.map_or("-", |d| d.as_str());
        let _ = writeln!(
            message,
            "{}. {} - {} {}",
            index + 1,
            record.name,
            code,
            record.document_number
        );
    }
}

/// Builds the messaging deep link: the recipient in the path, the summary
/// URL-encoded in the `text` query parameter. Only the text is this core's
/// concern; the transport belongs to the messaging collaborator.
#[must_use]
pub fn handoff_link(recipient: &str, message: &str) -> String {
    format!("https://wa.me/{recipient}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use andino_domain::{DocumentType, ReservationDraft};
    use chrono::NaiveDate;

    fn sample_draft() -> ReservationDraft {
        let mut draft: ReservationDraft = ReservationDraft::new();
        draft.contact_name = String::from("Ana Gomez");
        draft.contact_email = String::from("ana@x.com");
        draft.contact_phone = String::from("+57 3001234567");
        draft.selected_date = NaiveDate::from_ymd_opt(2026, 9, 12);
        draft.adult_count = 2;
        draft.adults = vec![
            PersonRecord {
                name: String::from("Ana Gomez"),
                document_type: Some(DocumentType::Cedula),
                document_number: String::from("1020304050"),
            },
            PersonRecord {
                name: String::from("Luis Rojas"),
                document_type: Some(DocumentType::Pasaporte),
                document_number: String::from("AB123456"),
            },
        ];
        draft.child_count = 1;
        draft.children = vec![PersonRecord {
            name: String::from("Sofia Gomez"),
            document_type: Some(DocumentType::RegistroCivil),
            document_number: String::from("445566"),
        }];
        draft.emergency_contact.name = String::from("Marta Diaz");
        draft.emergency_contact.phone = String::from("3009876543");
        draft
    }

    #[test]
    fn test_message_lists_participants_in_input_order() {
        let message: String = build_handoff_message(&sample_draft(), "Nevado del Tolima");

        let ana: usize = message.find("1. Ana Gomez - CC 1020304050").unwrap();
        let luis: usize = message.find("2. Luis Rojas - PA AB123456").unwrap();
        let sofia: usize = message.find("1. Sofia Gomez - RC 445566").unwrap();
        assert!(ana < luis);
        assert!(luis < sofia);
    }

    #[test]
    fn test_message_has_one_line_per_participant() {
        let message: String = build_handoff_message(&sample_draft(), "Nevado del Tolima");

        let adult_lines: usize = message
            .lines()
            .filter(|line| line.contains("Ana Gomez - ") || line.contains("Luis Rojas - "))
            .count();
        let child_lines: usize = message
            .lines()
            .filter(|line| line.contains("Sofia Gomez - "))
            .count();
        assert_eq!(adult_lines, 2);
        assert_eq!(child_lines, 1);
    }

    #[test]
    fn test_message_contains_every_section() {
        let message: String = build_handoff_message(&sample_draft(), "Nevado del Tolima");

        assert!(message.contains("*Nueva reserva - Nevado del Tolima*"));
        assert!(message.contains("*Contacto*"));
        assert!(message.contains("Teléfono: +57 3001234567"));
        assert!(message.contains("📅 Fecha: 12/09/2026"));
        assert!(message.contains("*Participantes* (2 adultos, 1 niños)"));
        assert!(message.contains("*Contacto de emergencia*"));
        assert!(message.ends_with("Marta Diaz - 3009876543"));
    }

    #[test]
    fn test_message_is_deterministic() {
        let draft: ReservationDraft = sample_draft();
        assert_eq!(
            build_handoff_message(&draft, "Nevado del Tolima"),
            build_handoff_message(&draft, "Nevado del Tolima")
        );
    }

    #[test]
    fn test_message_skips_empty_children_section() {
        let mut draft: ReservationDraft = sample_draft();
        draft.child_count = 0;
        draft.children.clear();

        let message: String = build_handoff_message(&draft, "Nevado del Tolima");
        assert!(!message.contains("Niños:"));
    }

    #[test]
    fn test_handoff_link_encodes_the_text() {
        let link: String = handoff_link("573001112233", "Hola *mundo* á");

        assert!(link.starts_with("https://wa.me/573001112233?text="));
        assert!(link.contains("Hola%20%2Amundo%2A%20%C3%A1"));
        assert!(!link.contains(' '));
    }
}
