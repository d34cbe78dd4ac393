// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use fapiao_domain::{AwardRecord, DrawDate, PrizeTier, WinningNumber};

pub fn create_test_draw_date() -> DrawDate {
    DrawDate::parse("2024-03-25").expect("Valid test draw date")
}

pub fn create_test_numbers(values: &[&str]) -> Vec<WinningNumber> {
    values
        .iter()
        .map(|value| WinningNumber::parse(value).expect("Valid test winning number"))
        .collect()
}

pub fn create_test_record(tier: PrizeTier, numbers: &[&str]) -> AwardRecord {
    AwardRecord::new(tier, create_test_numbers(numbers), create_test_draw_date())
}

/// Creates a representative batch: one exact-match tier and the
/// grand prize with two derived tiers sharing its numbers.
pub fn create_test_batch() -> Vec<AwardRecord> {
    vec![
        create_test_record(PrizeTier::Special, &["00011122"]),
        create_test_record(PrizeTier::GrandPrize, &["12345678", "87654321"]),
        create_test_record(PrizeTier::Second, &["12345678", "87654321"]),
        create_test_record(PrizeTier::Third, &["12345678", "87654321"]),
    ]
}
