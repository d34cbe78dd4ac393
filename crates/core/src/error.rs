// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fapiao_domain::{DomainError, DrawDate, PrizeTier};

/// Errors that can occur during matching and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A prize sheet requests derived tiers without grand-prize numbers.
    IncompleteSheet {
        /// The draw date of the incomplete sheet.
        draw_date: DrawDate,
        /// How many derived tiers were requested.
        derived_tier_count: usize,
    },
    /// Two award records share the same tier and draw date.
    ///
    /// Upsert discipline prevents this. If it is observed anyway, the
    /// matcher must not silently pick one record over the other.
    DuplicateTierRecord {
        /// The duplicated tier.
        tier: PrizeTier,
        /// The draw date on which the duplicate was found.
        draw_date: DrawDate,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IncompleteSheet {
                draw_date,
                derived_tier_count,
            } => {
                write!(
                    f,
                    "Prize sheet for {draw_date} requests {derived_tier_count} derived tier(s) but has no grand-prize numbers"
                )
            }
            Self::DuplicateTierRecord { tier, draw_date } => {
                write!(
                    f,
                    "Duplicate award record for tier '{tier}' on draw date {draw_date}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
