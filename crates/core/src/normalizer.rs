// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use fapiao_domain::{AwardRecord, DrawDate, PrizeTier, WinningNumber};

/// A parsed prize sheet for one draw date, before normalization.
///
/// The sheet carries the independently drawn numbers (special, extra,
/// grand prize) plus the set of derived tiers the publication lists for
/// this draw. Derived tiers have no numbers of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeSheet {
    /// The draw date the sheet was published for.
    draw_date: DrawDate,
    /// The grand-prize numbers (one draw may have several).
    grand_prize_numbers: Vec<WinningNumber>,
    /// Independently drawn special-prize numbers.
    special_numbers: Vec<WinningNumber>,
    /// Independently drawn extra-prize numbers.
    extra_numbers: Vec<WinningNumber>,
    /// The derived tiers present on the sheet.
    derived_tiers: Vec<PrizeTier>,
}

impl PrizeSheet {
    /// Creates a new `PrizeSheet`.
    ///
    /// # Arguments
    ///
    /// * `draw_date` - The draw date
    /// * `grand_prize_numbers` - The grand-prize numbers
    /// * `special_numbers` - The special-prize numbers
    /// * `extra_numbers` - The extra-prize numbers
    /// * `derived_tiers` - The derived tiers listed on the sheet
    #[must_use]
    pub const fn new(
        draw_date: DrawDate,
        grand_prize_numbers: Vec<WinningNumber>,
        special_numbers: Vec<WinningNumber>,
        extra_numbers: Vec<WinningNumber>,
        derived_tiers: Vec<PrizeTier>,
    ) -> Self {
        Self {
            draw_date,
            grand_prize_numbers,
            special_numbers,
            extra_numbers,
            derived_tiers,
        }
    }

    /// Returns the draw date.
    #[must_use]
    pub const fn draw_date(&self) -> DrawDate {
        self.draw_date
    }

    /// Returns the grand-prize numbers.
    #[must_use]
    pub fn grand_prize_numbers(&self) -> &[WinningNumber] {
        &self.grand_prize_numbers
    }

    /// Returns the special-prize numbers.
    #[must_use]
    pub fn special_numbers(&self) -> &[WinningNumber] {
        &self.special_numbers
    }

    /// Returns the extra-prize numbers.
    #[must_use]
    pub fn extra_numbers(&self) -> &[WinningNumber] {
        &self.extra_numbers
    }

    /// Returns the derived tiers listed on the sheet.
    #[must_use]
    pub fn derived_tiers(&self) -> &[PrizeTier] {
        &self.derived_tiers
    }
}

/// Normalizes a prize sheet into one canonical record per tier.
///
/// Special, extra, and grand-prize records carry their own numbers and
/// are emitted only when non-empty. Each derived tier on the sheet is
/// emitted with an independent copy of the grand-prize numbers, so a
/// later re-ingestion can update the grand-prize record without touching
/// a derived record and vice versa. Derived tiers are restricted to the
/// derived set, de-duplicated, and emitted in precedence order.
///
/// # Arguments
///
/// * `sheet` - The parsed prize sheet
///
/// # Returns
///
/// The canonical `AwardRecord`s to upsert for the sheet's draw date, in
/// precedence order.
///
/// # Errors
///
/// Returns `CoreError::IncompleteSheet` if the sheet lists derived tiers
/// but has no grand-prize numbers. The caller must discard the whole
/// ingestion batch; nothing may be partially applied.
pub fn normalize_sheet(sheet: &PrizeSheet) -> Result<Vec<AwardRecord>, CoreError> {
    let mut derived: Vec<PrizeTier> = sheet
        .derived_tiers()
        .iter()
        .copied()
        .filter(PrizeTier::is_derived)
        .collect();
    derived.sort_by_key(PrizeTier::precedence_rank);
    derived.dedup();

    if !derived.is_empty() && sheet.grand_prize_numbers().is_empty() {
        return Err(CoreError::IncompleteSheet {
            draw_date: sheet.draw_date(),
            derived_tier_count: derived.len(),
        });
    }

    let mut records: Vec<AwardRecord> = Vec::new();

    if !sheet.special_numbers().is_empty() {
        records.push(AwardRecord::new(
            PrizeTier::Special,
            sheet.special_numbers().to_vec(),
            sheet.draw_date(),
        ));
    }

    if !sheet.extra_numbers().is_empty() {
        records.push(AwardRecord::new(
            PrizeTier::Extra,
            sheet.extra_numbers().to_vec(),
            sheet.draw_date(),
        ));
    }

    if !sheet.grand_prize_numbers().is_empty() {
        records.push(AwardRecord::new(
            PrizeTier::GrandPrize,
            sheet.grand_prize_numbers().to_vec(),
            sheet.draw_date(),
        ));
    }

    for tier in derived {
        records.push(AwardRecord::new(
            tier,
            sheet.grand_prize_numbers().to_vec(),
            sheet.draw_date(),
        ));
    }

    Ok(records)
}
