// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fapiao_domain::{AwardRecord, DrawDate, InvoiceNumber, PrizeTier, WinningNumber};

pub fn create_test_draw_date() -> DrawDate {
    DrawDate::parse("2024-03-25").unwrap()
}

pub fn create_test_invoice(value: &str) -> InvoiceNumber {
    InvoiceNumber::parse(value).unwrap()
}

pub fn create_test_numbers(values: &[&str]) -> Vec<WinningNumber> {
    values
        .iter()
        .map(|v| WinningNumber::parse(v).unwrap())
        .collect()
}

pub fn create_test_record(tier: PrizeTier, values: &[&str]) -> AwardRecord {
    AwardRecord::new(tier, create_test_numbers(values), create_test_draw_date())
}
