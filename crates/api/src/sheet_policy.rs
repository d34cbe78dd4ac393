// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Prize sheet request policy.
//!
//! This module enforces request-shape requirements on ingested prize
//! sheets before they reach normalization. Policy violations are about
//! the request itself (empty, oversized, self-contradictory), not about
//! domain semantics.

use thiserror::Error;

use crate::request_response::IngestPrizeSheetRequest;

/// Prize sheet policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetPolicyError {
    /// The sheet carries no numbers and no derived tiers.
    #[error("Prize sheet is empty: no winning numbers and no derived tiers")]
    EmptySheet,

    /// A number field exceeds the per-field maximum.
    #[error("Field '{field}' carries {count} numbers, which exceeds the maximum of {max}")]
    TooManyNumbers {
        field: String,
        count: usize,
        max: usize,
    },

    /// The same derived tier appears more than once.
    #[error("Derived tier '{name}' appears more than once")]
    DuplicateDerivedTier { name: String },
}

/// Prize sheet policy configuration.
pub struct SheetPolicy {
    /// Maximum winning numbers allowed per field.
    pub max_numbers_per_field: usize,
}

impl Default for SheetPolicy {
    fn default() -> Self {
        Self {
            max_numbers_per_field: 20,
        }
    }
}

impl SheetPolicy {
    /// Validates a prize sheet request against the policy.
    ///
    /// # Arguments
    ///
    /// * `request` - The ingestion request to validate
    ///
    /// # Errors
    ///
    /// Returns a `SheetPolicyError` if the request does not meet policy
    /// requirements.
    pub fn validate(&self, request: &IngestPrizeSheetRequest) -> Result<(), SheetPolicyError> {
        let fields: [(&str, &[String]); 3] = [
            ("grand_prize_numbers", &request.grand_prize_numbers),
            ("special_numbers", &request.special_numbers),
            ("extra_numbers", &request.extra_numbers),
        ];

        if fields.iter().all(|(_, numbers)| numbers.is_empty())
            && request.derived_tiers.is_empty()
        {
            return Err(SheetPolicyError::EmptySheet);
        }

        for (field, numbers) in fields {
            if numbers.len() > self.max_numbers_per_field {
                return Err(SheetPolicyError::TooManyNumbers {
                    field: field.to_string(),
                    count: numbers.len(),
                    max: self.max_numbers_per_field,
                });
            }
        }

        for (index, name) in request.derived_tiers.iter().enumerate() {
            if request.derived_tiers[..index].contains(name) {
                return Err(SheetPolicyError::DuplicateDerivedTier { name: name.clone() });
            }
        }

        Ok(())
    }
}
