// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invoice number is not exactly 8 digits after normalization.
    InvalidInvoiceNumber(String),
    /// Winning number is empty, too long, or contains non-digits.
    InvalidWinningNumber(String),
    /// Tier name does not belong to the closed tier set.
    UnknownTier(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInvoiceNumber(value) => {
                write!(
                    f,
                    "Invalid invoice number '{value}': must be exactly 8 digits"
                )
            }
            Self::InvalidWinningNumber(value) => {
                write!(f, "Invalid winning number '{value}': must be 1 to 8 digits")
            }
            Self::UnknownTier(name) => write!(f, "Unknown prize tier '{name}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
