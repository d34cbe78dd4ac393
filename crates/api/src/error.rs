// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use fapiao::CoreError;
use fapiao_domain::DomainError;
use fapiao_persistence::PersistenceError;

use crate::sheet_policy::SheetPolicyError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Each variant corresponds to one outcome category: invalid caller input,
/// missing data, a rule violation, corrupted stored data, or an internal
/// fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Stored data could not be reconstructed into domain types.
    DataIntegrity {
        /// A description of the integrity failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::DataIntegrity { message } => {
                write!(f, "Data integrity error: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SheetPolicyError> for ApiError {
    fn from(err: SheetPolicyError) -> Self {
        Self::DomainRuleViolation {
            rule: String::from("prize_sheet_policy"),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidInvoiceNumber(value) => ApiError::InvalidInput {
            field: String::from("invoice_number"),
            message: format!("Invalid invoice number '{value}': must be exactly 8 digits"),
        },
        DomainError::InvalidWinningNumber(value) => ApiError::InvalidInput {
            field: String::from("winning_number"),
            message: format!("Invalid winning number '{value}': must be 1 to 8 digits"),
        },
        DomainError::UnknownTier(name) => ApiError::InvalidInput {
            field: String::from("tier"),
            message: format!("Unknown prize tier '{name}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("draw_date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::IncompleteSheet {
            draw_date,
            derived_tier_count,
        } => ApiError::DomainRuleViolation {
            rule: String::from("complete_prize_sheet"),
            message: format!(
                "Prize sheet for draw date {draw_date} names {derived_tier_count} derived tier(s) but carries no grand prize numbers"
            ),
        },
        CoreError::DuplicateTierRecord { tier, draw_date } => ApiError::DataIntegrity {
            message: format!("Duplicate award record for tier '{tier}' on draw date {draw_date}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Reconstruction failures indicate corrupted stored data and surface
/// as integrity errors; missing rows surface as not-found; everything
/// else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ReconstructionError(message) => ApiError::DataIntegrity { message },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Award record"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
