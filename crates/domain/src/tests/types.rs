// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AwardRecord, DomainError, DrawDate, InvoiceNumber, PrizeTier, WinningNumber};

#[test]
fn test_invoice_number_accepts_plain_digits() {
    let invoice: InvoiceNumber = InvoiceNumber::parse("12345678").unwrap();
    assert_eq!(invoice.value(), "12345678");
}

#[test]
fn test_invoice_number_trims_whitespace() {
    let invoice: InvoiceNumber = InvoiceNumber::parse("  12345678 ").unwrap();
    assert_eq!(invoice.value(), "12345678");
}

#[test]
fn test_invoice_number_removes_hyphens() {
    let invoice: InvoiceNumber = InvoiceNumber::parse("1234-5678").unwrap();
    assert_eq!(invoice.value(), "12345678");
}

#[test]
fn test_invoice_number_rejects_seven_digits_after_cleaning() {
    let result: Result<InvoiceNumber, DomainError> = InvoiceNumber::parse("1234-567");
    assert!(matches!(
        result,
        Err(DomainError::InvalidInvoiceNumber(_))
    ));
}

#[test]
fn test_invoice_number_rejects_nine_digits() {
    let result: Result<InvoiceNumber, DomainError> = InvoiceNumber::parse("123456789");
    assert!(matches!(
        result,
        Err(DomainError::InvalidInvoiceNumber(_))
    ));
}

#[test]
fn test_invoice_number_rejects_non_digits() {
    let result: Result<InvoiceNumber, DomainError> = InvoiceNumber::parse("1234567a");
    assert!(matches!(
        result,
        Err(DomainError::InvalidInvoiceNumber(_))
    ));
}

#[test]
fn test_invoice_number_rejects_empty() {
    let result: Result<InvoiceNumber, DomainError> = InvoiceNumber::parse("");
    assert!(matches!(
        result,
        Err(DomainError::InvalidInvoiceNumber(_))
    ));
}

#[test]
fn test_invoice_number_suffix() {
    let invoice: InvoiceNumber = InvoiceNumber::parse("12345678").unwrap();
    assert_eq!(invoice.suffix(3), "678");
    assert_eq!(invoice.suffix(7), "2345678");
    assert_eq!(invoice.suffix(8), "12345678");
}

#[test]
fn test_winning_number_accepts_eight_digits() {
    let number: WinningNumber = WinningNumber::parse("00011122").unwrap();
    assert_eq!(number.value(), "00011122");
    assert_eq!(number.digit_count(), 8);
}

#[test]
fn test_winning_number_accepts_short_values() {
    let number: WinningNumber = WinningNumber::parse("123").unwrap();
    assert_eq!(number.value(), "123");
    assert_eq!(number.digit_count(), 3);
}

#[test]
fn test_winning_number_rejects_empty() {
    let result: Result<WinningNumber, DomainError> = WinningNumber::parse("  ");
    assert!(matches!(
        result,
        Err(DomainError::InvalidWinningNumber(_))
    ));
}

#[test]
fn test_winning_number_rejects_nine_digits() {
    let result: Result<WinningNumber, DomainError> = WinningNumber::parse("123456789");
    assert!(matches!(
        result,
        Err(DomainError::InvalidWinningNumber(_))
    ));
}

#[test]
fn test_winning_number_rejects_non_digits() {
    let result: Result<WinningNumber, DomainError> = WinningNumber::parse("12a4");
    assert!(matches!(
        result,
        Err(DomainError::InvalidWinningNumber(_))
    ));
}

#[test]
fn test_winning_number_suffix_clamps_to_length() {
    let number: WinningNumber = WinningNumber::parse("678").unwrap();
    assert_eq!(number.suffix(3), "678");
    assert_eq!(number.suffix(6), "678");
}

#[test]
fn test_draw_date_parse_and_display_round_trip() {
    let date: DrawDate = DrawDate::parse("2024-03-25").unwrap();
    assert_eq!(format!("{date}"), "2024-03-25");
}

#[test]
fn test_draw_date_rejects_malformed_text() {
    let result: Result<DrawDate, DomainError> = DrawDate::parse("25/03/2024");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_draw_date_rejects_impossible_date() {
    let result: Result<DrawDate, DomainError> = DrawDate::parse("2024-02-30");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_draw_date_ordering() {
    let earlier: DrawDate = DrawDate::parse("2024-01-25").unwrap();
    let later: DrawDate = DrawDate::parse("2024-03-25").unwrap();
    assert!(earlier < later);
}

#[test]
fn test_award_record_accessors() {
    let draw_date: DrawDate = DrawDate::parse("2024-03-25").unwrap();
    let numbers: Vec<WinningNumber> = vec![WinningNumber::parse("12345678").unwrap()];
    let record: AwardRecord = AwardRecord::new(PrizeTier::GrandPrize, numbers, draw_date);

    assert_eq!(record.tier(), PrizeTier::GrandPrize);
    assert_eq!(record.reference_numbers().len(), 1);
    assert_eq!(record.reference_numbers()[0].value(), "12345678");
    assert_eq!(record.draw_date(), draw_date);
}
