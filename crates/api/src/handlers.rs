// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;

use tracing::{debug, info};

use fapiao::{MatchOutcome, PrizeSheet, match_invoice, normalize_sheet};
use fapiao_domain::{AwardRecord, DrawDate, InvoiceNumber, PrizeTier, WinningNumber};
use fapiao_persistence::SqlitePersistence;

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    AwardRecordInfo, CheckInvoiceRequest, CheckInvoiceResponse, IngestPrizeSheetRequest,
    IngestPrizeSheetResponse, ListAwardRecordsResponse, ListDrawDatesResponse,
};
use crate::sheet_policy::SheetPolicy;

/// Parses a draw date string from a request.
fn parse_draw_date(raw: &str) -> Result<DrawDate, ApiError> {
    DrawDate::parse(raw).map_err(translate_domain_error)
}

/// Parses one request number field into winning numbers.
///
/// The field name is reported on failure so callers can correct the
/// offending field.
fn parse_number_field(field: &str, values: &[String]) -> Result<Vec<WinningNumber>, ApiError> {
    values
        .iter()
        .map(|value| {
            WinningNumber::parse(value).map_err(|e| match translate_domain_error(e) {
                ApiError::InvalidInput { message, .. } => ApiError::InvalidInput {
                    field: field.to_string(),
                    message,
                },
                other => other,
            })
        })
        .collect()
}

/// Checks an invoice number against the award records of a draw date.
///
/// This function:
/// - Validates the invoice number and draw date
/// - Loads the stored award-record snapshot for the date
/// - Runs precedence-ordered matching
/// - Renders a human-readable outcome message
///
/// # Arguments
///
/// * `persistence` - The persistence layer to query
/// * `request` - The API request to check an invoice
///
/// # Returns
///
/// * `Ok(CheckInvoiceResponse)` with the match outcome
/// * `Err(ApiError)` if validation fails or no records exist for the date
///
/// # Errors
///
/// Returns an error if:
/// - The invoice number or draw date is malformed
/// - No award records are stored for the draw date
/// - Stored records cannot be reconstructed
pub fn check_invoice(
    persistence: &mut SqlitePersistence,
    request: &CheckInvoiceRequest,
) -> Result<CheckInvoiceResponse, ApiError> {
    let invoice: InvoiceNumber =
        InvoiceNumber::parse(&request.invoice_number).map_err(translate_domain_error)?;
    let draw_date: DrawDate = parse_draw_date(&request.draw_date)?;

    let records: Vec<AwardRecord> = persistence
        .load_award_records(&draw_date)
        .map_err(translate_persistence_error)?;

    if records.is_empty() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Award records"),
            message: format!("No award records stored for draw date {draw_date}"),
        });
    }

    let outcome: MatchOutcome = match_invoice(&invoice, &records).map_err(translate_core_error)?;

    debug!(
        invoice = invoice.value(),
        draw_date = %draw_date,
        won = outcome.is_win(),
        "Checked invoice"
    );

    let response: CheckInvoiceResponse = match outcome {
        MatchOutcome::Win {
            tier,
            matched_suffix,
            reference_numbers,
        } => CheckInvoiceResponse {
            won: true,
            tier: Some(tier.to_string()),
            matched_suffix: Some(matched_suffix.clone()),
            reference_numbers: reference_numbers
                .iter()
                .map(|number| number.value().to_string())
                .collect(),
            draw_date: draw_date.to_string(),
            message: format!(
                "Invoice {} won the {} prize for draw date {} (matched '{}')",
                invoice.value(),
                tier,
                draw_date,
                matched_suffix
            ),
        },
        MatchOutcome::NoWin => CheckInvoiceResponse {
            won: false,
            tier: None,
            matched_suffix: None,
            reference_numbers: Vec::new(),
            draw_date: draw_date.to_string(),
            message: format!(
                "Invoice {} did not win a prize for draw date {}",
                invoice.value(),
                draw_date
            ),
        },
    };

    Ok(response)
}

/// Ingests a prize sheet: validates, normalizes, and upserts its records.
///
/// This function:
/// - Enforces the sheet policy (non-empty, bounded, no duplicate tiers)
/// - Parses the sheet fields into domain types
/// - Normalizes the sheet into canonical award records
/// - Upserts the whole batch in a single transaction
///
/// # Arguments
///
/// * `persistence` - The persistence layer to write to
/// * `request` - The API request carrying the prize sheet
///
/// # Returns
///
/// * `Ok(IngestPrizeSheetResponse)` with per-batch accounting
/// * `Err(ApiError)` if the sheet is invalid; nothing is written on error
///
/// # Errors
///
/// Returns an error if:
/// - The sheet violates the request policy
/// - Any field fails domain validation
/// - The sheet names derived tiers without grand prize numbers
/// - The upsert transaction fails
pub fn ingest_prize_sheet(
    persistence: &mut SqlitePersistence,
    request: &IngestPrizeSheetRequest,
) -> Result<IngestPrizeSheetResponse, ApiError> {
    SheetPolicy::default().validate(request)?;

    let draw_date: DrawDate = parse_draw_date(&request.draw_date)?;
    let grand_prize_numbers: Vec<WinningNumber> =
        parse_number_field("grand_prize_numbers", &request.grand_prize_numbers)?;
    let special_numbers: Vec<WinningNumber> =
        parse_number_field("special_numbers", &request.special_numbers)?;
    let extra_numbers: Vec<WinningNumber> =
        parse_number_field("extra_numbers", &request.extra_numbers)?;

    let derived_tiers: Vec<PrizeTier> = request
        .derived_tiers
        .iter()
        .map(|name| PrizeTier::from_str(name).map_err(translate_domain_error))
        .collect::<Result<Vec<PrizeTier>, ApiError>>()?;

    let sheet: PrizeSheet = PrizeSheet::new(
        draw_date,
        grand_prize_numbers,
        special_numbers,
        extra_numbers,
        derived_tiers,
    );

    let records: Vec<AwardRecord> = normalize_sheet(&sheet).map_err(translate_core_error)?;

    let summary = persistence
        .upsert_award_records(&records)
        .map_err(translate_persistence_error)?;

    info!(
        draw_date = %draw_date,
        inserted = summary.inserted,
        updated = summary.updated,
        unchanged = summary.unchanged,
        "Ingested prize sheet"
    );

    Ok(IngestPrizeSheetResponse {
        draw_date: draw_date.to_string(),
        inserted: summary.inserted,
        updated: summary.updated,
        unchanged: summary.unchanged,
        message: format!(
            "Ingested {} award record(s) for draw date {}",
            records.len(),
            draw_date
        ),
    })
}

/// Lists the award records stored for a draw date, in precedence order.
///
/// # Arguments
///
/// * `persistence` - The persistence layer to query
/// * `draw_date` - The draw date string from the request
///
/// # Errors
///
/// Returns an error if the date is malformed or the snapshot cannot be
/// loaded. An empty record list is not an error here; callers that need
/// not-found semantics check the invoice path instead.
pub fn list_award_records(
    persistence: &mut SqlitePersistence,
    draw_date: &str,
) -> Result<ListAwardRecordsResponse, ApiError> {
    let date: DrawDate = parse_draw_date(draw_date)?;

    let mut records: Vec<AwardRecord> = persistence
        .load_award_records(&date)
        .map_err(translate_persistence_error)?;
    records.sort_by_key(|record| record.tier().precedence_rank());

    let infos: Vec<AwardRecordInfo> = records
        .iter()
        .map(|record| AwardRecordInfo {
            tier: record.tier().to_string(),
            draw_date: record.draw_date().to_string(),
            reference_numbers: record
                .reference_numbers()
                .iter()
                .map(|number| number.value().to_string())
                .collect(),
        })
        .collect();

    Ok(ListAwardRecordsResponse {
        draw_date: date.to_string(),
        records: infos,
    })
}

/// Lists every draw date with stored award records, ascending.
///
/// # Arguments
///
/// * `persistence` - The persistence layer to query
///
/// # Errors
///
/// Returns an error if the query fails or a stored date is corrupt.
pub fn list_draw_dates(
    persistence: &mut SqlitePersistence,
) -> Result<ListDrawDatesResponse, ApiError> {
    let dates: Vec<DrawDate> = persistence
        .list_draw_dates()
        .map_err(translate_persistence_error)?;

    Ok(ListDrawDatesResponse {
        draw_dates: dates.iter().map(DrawDate::to_string).collect(),
    })
}
