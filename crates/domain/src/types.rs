// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The participant category a [`PersonRecord`] belongs to.
///
/// Adults and children carry the same fields but draw their document types
/// from different jurisdiction sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    /// An adult participant (at least one is always required).
    #[serde(rename = "adults")]
    Adult,
    /// A minor participant.
    #[serde(rename = "children")]
    Child,
}

impl ParticipantKind {
    /// Converts this kind to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "adults",
            Self::Child => "children",
        }
    }

    /// The prefix used when building per-index validation error keys,
    /// e.g. `adult0name`.
    #[must_use]
    pub const fn key_prefix(&self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
        }
    }

    /// The Spanish label used in user-facing messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Adult => "adulto",
            Self::Child => "niño",
        }
    }
}

impl FromStr for ParticipantKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adults" => Ok(Self::Adult),
            "children" => Ok(Self::Child),
            _ => Err(DomainError::InvalidParticipantKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity-document types accepted on a reservation.
///
/// Adults and minors select from different subsets: a minor may travel with
/// a civil registry or identity card, an adult may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Cédula de ciudadanía ("CC").
    #[serde(rename = "CC")]
    Cedula,
    /// Cédula de extranjería ("CE").
    #[serde(rename = "CE")]
    CedulaExtranjeria,
    /// Pasaporte ("PA").
    #[serde(rename = "PA")]
    Pasaporte,
    /// Tarjeta de identidad ("TI"), minors only.
    #[serde(rename = "TI")]
    TarjetaIdentidad,
    /// Registro civil ("RC"), minors only.
    #[serde(rename = "RC")]
    RegistroCivil,
}

/// Document types an adult may select.
pub const ADULT_DOCUMENT_TYPES: &[DocumentType] = &[
    DocumentType::Cedula,
    DocumentType::CedulaExtranjeria,
    DocumentType::Pasaporte,
];

/// Document types a minor may select. This set is larger than the adult
/// set: minors without a cédula travel on a civil registry or identity card.
pub const MINOR_DOCUMENT_TYPES: &[DocumentType] = &[
    DocumentType::RegistroCivil,
    DocumentType::TarjetaIdentidad,
    DocumentType::Cedula,
    DocumentType::Pasaporte,
];

impl DocumentType {
    /// Converts this document type to its two-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cedula => "CC",
            Self::CedulaExtranjeria => "CE",
            Self::Pasaporte => "PA",
            Self::TarjetaIdentidad => "TI",
            Self::RegistroCivil => "RC",
        }
    }

    /// The Spanish display name for this document type.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cedula => "Cédula de ciudadanía",
            Self::CedulaExtranjeria => "Cédula de extranjería",
            Self::Pasaporte => "Pasaporte",
            Self::TarjetaIdentidad => "Tarjeta de identidad",
            Self::RegistroCivil => "Registro civil",
        }
    }

    /// Returns the set of document types allowed for a participant category.
    #[must_use]
    pub const fn allowed_for(kind: ParticipantKind) -> &'static [Self] {
        match kind {
            ParticipantKind::Adult => ADULT_DOCUMENT_TYPES,
            ParticipantKind::Child => MINOR_DOCUMENT_TYPES,
        }
    }

    /// Checks whether this document type may be selected for the given
    /// participant category.
    #[must_use]
    pub fn valid_for(&self, kind: ParticipantKind) -> bool {
        Self::allowed_for(kind).contains(self)
    }
}

impl FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CC" => Ok(Self::Cedula),
            "CE" => Ok(Self::CedulaExtranjeria),
            "PA" => Ok(Self::Pasaporte),
            "TI" => Ok(Self::TarjetaIdentidad),
            "RC" => Ok(Self::RegistroCivil),
            _ => Err(DomainError::InvalidDocumentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One participant's identity fields.
///
/// A record is created empty when the count for its category grows, and its
/// index stays stable while the count covers it. `document_type` is `None`
/// until the user picks one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// The participant's full name.
    pub name: String,
    /// The selected document type, if any.
    pub document_type: Option<DocumentType>,
    /// The document number.
    pub document_number: String,
}

impl PersonRecord {
    /// Creates an empty record, as produced when a participant count grows.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            name: String::new(),
            document_type: None,
            document_number: String::new(),
        }
    }

    /// Checks that all three fields are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.document_type.is_some()
            && !self.document_number.trim().is_empty()
    }

    /// Sets one field from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if `field` is `DocumentType` and `value` is not a
    /// known document-type code. An empty value clears the selection.
    pub fn set_field(&mut self, field: PersonField, value: &str) -> Result<(), DomainError> {
        match field {
            PersonField::Name => {
                self.name = value.to_string();
            }
            PersonField::DocumentType => {
                self.document_type = if value.is_empty() {
                    None
                } else {
                    Some(DocumentType::from_str(value)?)
                };
            }
            PersonField::DocumentNumber => {
                self.document_number = value.to_string();
            }
        }
        Ok(())
    }
}

impl Default for PersonRecord {
    fn default() -> Self {
        Self::empty()
    }
}

/// Selector for one field of a [`PersonRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonField {
    /// The participant's name.
    Name,
    /// The participant's document type.
    DocumentType,
    /// The participant's document number.
    DocumentNumber,
}

impl PersonField {
    /// The suffix used when building per-index validation error keys.
    #[must_use]
    pub const fn key_suffix(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DocumentType => "documentType",
            Self::DocumentNumber => "documentNumber",
        }
    }
}

impl FromStr for PersonField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "documentType" => Ok(Self::DocumentType),
            "documentNumber" => Ok(Self::DocumentNumber),
            _ => Err(DomainError::InvalidPersonField(s.to_string())),
        }
    }
}

/// Selector for one of the three contact fields edited on step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    /// The contact name.
    Name,
    /// The contact email address.
    Email,
    /// The contact phone number (country-coded form).
    Phone,
}

impl FromStr for ContactField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            _ => Err(DomainError::InvalidContactField(s.to_string())),
        }
    }
}

/// Selector for one field of the emergency contact edited on step 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmergencyField {
    /// The emergency contact's name.
    Name,
    /// The emergency contact's phone number.
    Phone,
}

impl FromStr for EmergencyField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            _ => Err(DomainError::InvalidEmergencyField(s.to_string())),
        }
    }
}

/// The emergency contact collected on step 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EmergencyContact {
    /// The emergency contact's name.
    pub name: String,
    /// The emergency contact's phone number. Either a bare digit string or
    /// a `+<code> <digits>` composite; normalized to one string here.
    pub phone: String,
}

impl EmergencyContact {
    /// Creates an empty emergency contact.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
        }
    }

    /// Sets one field from its wire representation.
    pub fn set_field(&mut self, field: EmergencyField, value: String) {
        match field {
            EmergencyField::Name => self.name = value,
            EmergencyField::Phone => self.phone = value,
        }
    }
}

/// The four sequential wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Step 1: contact details and tour date.
    Contact,
    /// Step 2: adult and child counts.
    Counts,
    /// Step 3: per-participant identity records.
    Participants,
    /// Step 4: emergency contact.
    Emergency,
}

impl Step {
    /// The 1-based step number shown in the UI.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Counts => 2,
            Self::Participants => 3,
            Self::Emergency => 4,
        }
    }

    /// Builds a step from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is outside 1..=4.
    pub const fn from_number(number: u8) -> Result<Self, DomainError> {
        match number {
            1 => Ok(Self::Contact),
            2 => Ok(Self::Counts),
            3 => Ok(Self::Participants),
            4 => Ok(Self::Emergency),
            _ => Err(DomainError::InvalidStep(number)),
        }
    }

    /// The step after this one, or `None` from the last step.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Contact => Some(Self::Counts),
            Self::Counts => Some(Self::Participants),
            Self::Participants => Some(Self::Emergency),
            Self::Emergency => None,
        }
    }

    /// The step before this one, or `None` from the first step.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Contact => None,
            Self::Counts => Some(Self::Contact),
            Self::Participants => Some(Self::Counts),
            Self::Emergency => Some(Self::Participants),
        }
    }
}

/// The in-progress reservation form data for one booking session.
///
/// Invariant: `adults.len() == adult_count as usize` and
/// `children.len() == child_count as usize` after every mutation. The
/// synchronizer in the wizard crate is the only code that changes counts,
/// and it changes the count and the vec in the same operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    /// The booking contact's name.
    pub contact_name: String,
    /// The booking contact's email address.
    pub contact_email: String,
    /// The booking contact's phone number in `+<code> <digits>` form.
    pub contact_phone: String,
    /// The selected tour date, if one has been picked.
    pub selected_date: Option<NaiveDate>,
    /// Number of adults (always at least 1 in a valid draft).
    pub adult_count: u8,
    /// Number of children.
    pub child_count: u8,
    /// One record per adult, index-aligned with `adult_count`.
    pub adults: Vec<PersonRecord>,
    /// One record per child, index-aligned with `child_count`.
    pub children: Vec<PersonRecord>,
    /// The emergency contact collected on the last step.
    pub emergency_contact: EmergencyContact,
}

impl ReservationDraft {
    /// Creates the draft a new booking flow starts with: one empty adult,
    /// no children, nothing else filled in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contact_name: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            selected_date: None,
            adult_count: 1,
            child_count: 0,
            adults: vec![PersonRecord::empty()],
            children: Vec::new(),
            emergency_contact: EmergencyContact::empty(),
        }
    }

    /// Sets one of the three step-1 contact fields.
    pub fn set_contact_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.contact_name = value,
            ContactField::Email => self.contact_email = value,
            ContactField::Phone => self.contact_phone = value,
        }
    }

    /// The participant records for a category.
    #[must_use]
    pub const fn participants(&self, kind: ParticipantKind) -> &Vec<PersonRecord> {
        match kind {
            ParticipantKind::Adult => &self.adults,
            ParticipantKind::Child => &self.children,
        }
    }

    /// Mutable access to the participant records for a category.
    pub const fn participants_mut(&mut self, kind: ParticipantKind) -> &mut Vec<PersonRecord> {
        match kind {
            ParticipantKind::Adult => &mut self.adults,
            ParticipantKind::Child => &mut self.children,
        }
    }

    /// The participant count for a category.
    #[must_use]
    pub const fn count(&self, kind: ParticipantKind) -> u8 {
        match kind {
            ParticipantKind::Adult => self.adult_count,
            ParticipantKind::Child => self.child_count,
        }
    }
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self::new()
    }
}
