// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use fapiao_domain::{AwardRecord, DrawDate, InvoiceNumber, MatchMode, PrizeTier, WinningNumber};

/// The result of checking one invoice number against one draw's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The invoice won a prize.
    Win {
        /// The highest-precedence tier that matched.
        tier: PrizeTier,
        /// The exact digits that matched (full number for exact tiers,
        /// the compared suffix otherwise).
        matched_suffix: String,
        /// The full reference numbers of the winning tier.
        reference_numbers: Vec<WinningNumber>,
    },
    /// No tier matched.
    NoWin,
}

impl MatchOutcome {
    /// Returns whether this outcome is a win.
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }
}

/// Checks an invoice number against the award records of one draw date.
///
/// Records are evaluated in ascending precedence-rank order and evaluation
/// stops at the first match, so a win at a higher tier suppresses any
/// lower tier the same digits would also satisfy. Exact tiers compare the
/// full 8-digit number; suffix tiers compare the tier's trailing digit
/// count against each reference number. A reference number with fewer
/// digits than a tier requires is skipped for that comparison.
///
/// The function is pure. Callers are responsible for validating the
/// invoice number and for passing records that all belong to one draw
/// date.
///
/// # Arguments
///
/// * `invoice` - The validated invoice number to check
/// * `records` - The award records persisted for the draw date
///
/// # Returns
///
/// * `Ok(MatchOutcome::Win { .. })` for the highest-precedence matching tier
/// * `Ok(MatchOutcome::NoWin)` if no tier matches
///
/// # Errors
///
/// Returns `CoreError::DuplicateTierRecord` if two records share the same
/// tier and draw date. That state indicates a storage inconsistency and
/// must be investigated rather than resolved by picking one record.
pub fn match_invoice(
    invoice: &InvoiceNumber,
    records: &[AwardRecord],
) -> Result<MatchOutcome, CoreError> {
    let mut seen: Vec<(PrizeTier, DrawDate)> = Vec::with_capacity(records.len());
    for record in records {
        let key: (PrizeTier, DrawDate) = (record.tier(), record.draw_date());
        if seen.contains(&key) {
            return Err(CoreError::DuplicateTierRecord {
                tier: record.tier(),
                draw_date: record.draw_date(),
            });
        }
        seen.push(key);
    }

    let mut ordered: Vec<&AwardRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.tier().precedence_rank());

    for record in ordered {
        match record.tier().match_mode() {
            MatchMode::Exact => {
                for number in record.reference_numbers() {
                    if invoice.value() == number.value() {
                        return Ok(MatchOutcome::Win {
                            tier: record.tier(),
                            matched_suffix: number.value().to_string(),
                            reference_numbers: record.reference_numbers().to_vec(),
                        });
                    }
                }
            }
            MatchMode::Suffix(len) => {
                for number in record.reference_numbers() {
                    if number.digit_count() < usize::from(len) {
                        continue;
                    }
                    if invoice.suffix(len) == number.suffix(len) {
                        return Ok(MatchOutcome::Win {
                            tier: record.tier(),
                            matched_suffix: number.suffix(len).to_string(),
                            reference_numbers: record.reference_numbers().to_vec(),
                        });
                    }
                }
            }
        }
    }

    Ok(MatchOutcome::NoWin)
}
