// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or parsing domain values.
///
/// Step validation does not use this type: validators report per-field
/// problems through [`crate::FieldErrors`], which is data, not an error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The document type code is not one of the known jurisdiction codes.
    InvalidDocumentType(String),
    /// The document type is not allowed for the participant category.
    DocumentTypeNotAllowed {
        /// The rejected document type code.
        code: String,
        /// The participant category it was rejected for.
        kind: String,
    },
    /// The participant kind string is not `adults` or `children`.
    InvalidParticipantKind(String),
    /// The contact field name is unknown.
    InvalidContactField(String),
    /// The person field name is unknown.
    InvalidPersonField(String),
    /// The emergency-contact field name is unknown.
    InvalidEmergencyField(String),
    /// The step number is outside 1..=4.
    InvalidStep(u8),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDocumentType(code) => {
                write!(f, "Unknown document type code: {code}")
            }
            Self::DocumentTypeNotAllowed { code, kind } => {
                write!(f, "Document type {code} is not allowed for {kind}")
            }
            Self::InvalidParticipantKind(kind) => {
                write!(f, "Unknown participant kind: {kind}")
            }
            Self::InvalidContactField(field) => {
                write!(f, "Unknown contact field: {field}")
            }
            Self::InvalidPersonField(field) => {
                write!(f, "Unknown person field: {field}")
            }
            Self::InvalidEmergencyField(field) => {
                write!(f, "Unknown emergency-contact field: {field}")
            }
            Self::InvalidStep(number) => {
                write!(f, "Step number must be between 1 and 4, got {number}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
