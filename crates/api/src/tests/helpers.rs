// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use fapiao_persistence::SqlitePersistence;

use crate::request_response::{CheckInvoiceRequest, IngestPrizeSheetRequest};

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("in-memory database")
}

/// Builds a representative prize sheet request for 2024-03-25:
/// grand prize "12345678", special "00011122", and all six derived tiers.
pub fn create_test_sheet_request() -> IngestPrizeSheetRequest {
    IngestPrizeSheetRequest {
        draw_date: String::from("2024-03-25"),
        grand_prize_numbers: vec![String::from("12345678")],
        special_numbers: vec![String::from("00011122")],
        extra_numbers: vec![],
        derived_tiers: vec![
            String::from("Second"),
            String::from("Third"),
            String::from("Fourth"),
            String::from("Fifth"),
            String::from("Sixth"),
            String::from("BonusSixth"),
        ],
    }
}

pub fn create_check_request(invoice_number: &str, draw_date: &str) -> CheckInvoiceRequest {
    CheckInvoiceRequest {
        invoice_number: invoice_number.to_string(),
        draw_date: draw_date.to_string(),
    }
}
