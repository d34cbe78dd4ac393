// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Dates and numbers cross the boundary as strings; parsing
//! into domain types happens in the handlers.

/// API request to check an invoice against a draw's award records.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckInvoiceRequest {
    /// The invoice number as printed (separators tolerated).
    pub invoice_number: String,
    /// The draw date (ISO 8601, e.g., "2024-03-25").
    pub draw_date: String,
}

/// API response for an invoice check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckInvoiceResponse {
    /// Whether the invoice won a prize.
    pub won: bool,
    /// The winning tier name, when the invoice won.
    pub tier: Option<String>,
    /// The digits that matched, when the invoice won.
    pub matched_suffix: Option<String>,
    /// The reference numbers of the winning tier, when the invoice won.
    pub reference_numbers: Vec<String>,
    /// The draw date the check ran against.
    pub draw_date: String,
    /// A human-readable outcome message.
    pub message: String,
}

/// API request to ingest a prize sheet for a draw date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IngestPrizeSheetRequest {
    /// The draw date (ISO 8601).
    pub draw_date: String,
    /// Grand prize winning numbers (8 digits each).
    pub grand_prize_numbers: Vec<String>,
    /// Special prize winning numbers (8 digits each).
    pub special_numbers: Vec<String>,
    /// Extra prize winning numbers (8 digits each).
    pub extra_numbers: Vec<String>,
    /// Names of derived tiers awarded from the grand prize numbers.
    pub derived_tiers: Vec<String>,
}

/// API response for a successful prize sheet ingestion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IngestPrizeSheetResponse {
    /// The draw date the sheet was ingested for.
    pub draw_date: String,
    /// Records inserted for the first time.
    pub inserted: usize,
    /// Records whose reference numbers were rewritten.
    pub updated: usize,
    /// Records that already held identical reference numbers.
    pub unchanged: usize,
    /// A success message.
    pub message: String,
}

/// A stored award record rendered for the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AwardRecordInfo {
    /// The prize tier name.
    pub tier: String,
    /// The draw date (ISO 8601).
    pub draw_date: String,
    /// The tier's reference numbers.
    pub reference_numbers: Vec<String>,
}

/// API response listing the award records stored for a draw date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListAwardRecordsResponse {
    /// The draw date the records belong to.
    pub draw_date: String,
    /// The stored records in precedence order.
    pub records: Vec<AwardRecordInfo>,
}

/// API response listing every draw date with stored award records.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListDrawDatesResponse {
    /// Draw dates in ascending order (ISO 8601).
    pub draw_dates: Vec<String>,
}
