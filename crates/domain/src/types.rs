// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::tier::PrizeTier;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

/// ISO 8601 calendar date format used at every boundary.
const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// A candidate invoice number presented for prize checking.
///
/// Normalized on construction: surrounding whitespace is trimmed and
/// hyphens are removed anywhere in the input. The stored value is always
/// exactly 8 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceNumber {
    /// The normalized 8-digit value.
    value: String,
}

impl InvoiceNumber {
    /// Parses and normalizes a raw invoice number.
    ///
    /// # Arguments
    ///
    /// * `raw` - The invoice number as entered (may contain surrounding
    ///   whitespace and hyphen separators)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInvoiceNumber` if the cleaned value is
    /// not exactly 8 ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let cleaned: String = raw.trim().chars().filter(|c| *c != '-').collect();

        if cleaned.len() != 8 || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidInvoiceNumber(raw.trim().to_string()));
        }

        Ok(Self { value: cleaned })
    }

    /// Returns the normalized 8-digit value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the last `len` digits of the invoice number.
    ///
    /// Lengths beyond 8 are clamped to the full value.
    #[must_use]
    pub fn suffix(&self, len: u8) -> &str {
        let take: usize = usize::from(len).min(self.value.len());
        &self.value[self.value.len() - take..]
    }
}

impl std::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A published winning number, or one of its suffix sources.
///
/// Published reference numbers are normally 8 digits. Shorter values are
/// representable; they simply cannot satisfy a comparison that requires
/// more digits than they have.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningNumber {
    /// The digit string (1 to 8 ASCII digits).
    value: String,
}

impl WinningNumber {
    /// Parses a published winning number.
    ///
    /// # Arguments
    ///
    /// * `raw` - The winning number as published
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWinningNumber` if the trimmed value is
    /// empty, longer than 8 characters, or contains non-digits.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();

        if trimmed.is_empty()
            || trimmed.len() > 8
            || !trimmed.chars().all(|c| c.is_ascii_digit())
        {
            return Err(DomainError::InvalidWinningNumber(trimmed.to_string()));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the digit string.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the number of digits in the value.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.value.len()
    }

    /// Returns the last `len` digits of the winning number.
    ///
    /// Lengths beyond the value's digit count are clamped.
    #[must_use]
    pub fn suffix(&self, len: u8) -> &str {
        let take: usize = usize::from(len).min(self.value.len());
        &self.value[self.value.len() - take..]
    }
}

impl std::fmt::Display for WinningNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The date on which a set of winning numbers was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawDate {
    value: Date,
}

impl DrawDate {
    /// Creates a `DrawDate` from an already-constructed calendar date.
    #[must_use]
    pub const fn new(value: Date) -> Self {
        Self { value }
    }

    /// Parses a draw date from ISO 8601 text (`YYYY-MM-DD`).
    ///
    /// # Arguments
    ///
    /// * `date_string` - The date text
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the text is not a valid
    /// calendar date.
    pub fn parse(date_string: &str) -> Result<Self, DomainError> {
        let value: Date = Date::parse(date_string, DATE_FORMAT).map_err(|e| {
            DomainError::DateParseError {
                date_string: date_string.to_string(),
                error: e.to_string(),
            }
        })?;

        Ok(Self { value })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.value
    }
}

impl std::fmt::Display for DrawDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value.format(DATE_FORMAT) {
            Ok(formatted) => write!(f, "{formatted}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

/// The canonical comparison record for one tier on one draw date.
///
/// At most one record exists per `(tier, draw_date)`. For derived tiers
/// the reference numbers are an independent copy of the grand-prize
/// numbers, so comparison logic is uniform across tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRecord {
    /// The prize tier this record belongs to.
    tier: PrizeTier,
    /// The numbers an invoice is compared against for this tier.
    reference_numbers: Vec<WinningNumber>,
    /// The draw date the numbers were published for.
    draw_date: DrawDate,
}

impl AwardRecord {
    /// Creates a new `AwardRecord`.
    ///
    /// # Arguments
    ///
    /// * `tier` - The prize tier
    /// * `reference_numbers` - The numbers to compare against
    /// * `draw_date` - The draw date
    #[must_use]
    pub const fn new(
        tier: PrizeTier,
        reference_numbers: Vec<WinningNumber>,
        draw_date: DrawDate,
    ) -> Self {
        Self {
            tier,
            reference_numbers,
            draw_date,
        }
    }

    /// Returns the prize tier.
    #[must_use]
    pub const fn tier(&self) -> PrizeTier {
        self.tier
    }

    /// Returns the reference numbers.
    #[must_use]
    pub fn reference_numbers(&self) -> &[WinningNumber] {
        &self.reference_numbers
    }

    /// Returns the draw date.
    #[must_use]
    pub const fn draw_date(&self) -> DrawDate {
        self.draw_date
    }
}
