// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How an invoice number is compared against a tier's reference numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The full 8-digit invoice number must equal a reference number.
    Exact,
    /// The last `n` digits of the invoice number must equal the last `n`
    /// digits of a reference number.
    Suffix(u8),
}

/// A named prize level in the uniform-invoice lottery.
///
/// The tier set is closed. Precedence rank, match mode, and suffix length
/// are fixed attributes of each tier; matching iterates tiers by ascending
/// rank and stops at the first hit, so a higher tier always suppresses a
/// lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrizeTier {
    /// Special prize (特別獎). Independently drawn, full-number match.
    Special,
    /// Extra prize (特獎). Independently drawn, full-number match.
    Extra,
    /// Grand prize (頭獎). The numbers all derived tiers reference.
    GrandPrize,
    /// Second prize. Last 7 digits of a grand-prize number.
    Second,
    /// Third prize. Last 6 digits of a grand-prize number.
    Third,
    /// Fourth prize. Last 5 digits of a grand-prize number.
    Fourth,
    /// Fifth prize. Last 4 digits of a grand-prize number.
    Fifth,
    /// Sixth prize. Last 3 digits of a grand-prize number.
    Sixth,
    /// Additional sixth prize (增開六獎). Last 3 digits, lowest precedence.
    BonusSixth,
}

impl PrizeTier {
    /// All tiers in precedence order, highest first.
    pub const ALL: [Self; 9] = [
        Self::Special,
        Self::Extra,
        Self::GrandPrize,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::BonusSixth,
    ];

    /// Tiers whose reference numbers are copies of the grand-prize numbers.
    pub const DERIVED: [Self; 6] = [
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::BonusSixth,
    ];

    /// Returns the tier's precedence rank (1 is highest).
    ///
    /// Ranks are total and fixed. `BonusSixth` ranks below `Sixth` even
    /// though both compare the same 3-digit suffix.
    #[must_use]
    pub const fn precedence_rank(&self) -> u8 {
        match self {
            Self::Special => 1,
            Self::Extra => 2,
            Self::GrandPrize => 3,
            Self::Second => 4,
            Self::Third => 5,
            Self::Fourth => 6,
            Self::Fifth => 7,
            Self::Sixth => 8,
            Self::BonusSixth => 9,
        }
    }

    /// Returns the number of trailing digits compared for this tier.
    ///
    /// Exact-match tiers compare all 8 digits.
    #[must_use]
    pub const fn suffix_len(&self) -> u8 {
        match self {
            Self::Special | Self::Extra | Self::GrandPrize => 8,
            Self::Second => 7,
            Self::Third => 6,
            Self::Fourth => 5,
            Self::Fifth => 4,
            Self::Sixth | Self::BonusSixth => 3,
        }
    }

    /// Returns how invoice numbers are compared for this tier.
    #[must_use]
    pub const fn match_mode(&self) -> MatchMode {
        match self {
            Self::Special | Self::Extra | Self::GrandPrize => MatchMode::Exact,
            Self::Second => MatchMode::Suffix(7),
            Self::Third => MatchMode::Suffix(6),
            Self::Fourth => MatchMode::Suffix(5),
            Self::Fifth => MatchMode::Suffix(4),
            Self::Sixth | Self::BonusSixth => MatchMode::Suffix(3),
        }
    }

    /// Returns whether this tier's reference numbers are derived from the
    /// grand-prize numbers rather than independently drawn.
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        matches!(
            self,
            Self::Second
                | Self::Third
                | Self::Fourth
                | Self::Fifth
                | Self::Sixth
                | Self::BonusSixth
        )
    }

    /// Converts this tier to its storage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Special => "Special",
            Self::Extra => "Extra",
            Self::GrandPrize => "GrandPrize",
            Self::Second => "Second",
            Self::Third => "Third",
            Self::Fourth => "Fourth",
            Self::Fifth => "Fifth",
            Self::Sixth => "Sixth",
            Self::BonusSixth => "BonusSixth",
        }
    }
}

impl FromStr for PrizeTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Special" => Ok(Self::Special),
            "Extra" => Ok(Self::Extra),
            "GrandPrize" => Ok(Self::GrandPrize),
            "Second" => Ok(Self::Second),
            "Third" => Ok(Self::Third),
            "Fourth" => Ok(Self::Fourth),
            "Fifth" => Ok(Self::Fifth),
            "Sixth" => Ok(Self::Sixth),
            "BonusSixth" => Ok(Self::BonusSixth),
            _ => Err(DomainError::UnknownTier(s.to_string())),
        }
    }
}

impl std::fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
