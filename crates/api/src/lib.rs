// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Fapiao prize-checking service.
//!
//! This crate translates between the HTTP surface and the computation
//! core: request/response DTOs, explicit error translation, and the
//! handler functions the server routes call. Domain and core errors
//! never cross this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;
mod sheet_policy;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{check_invoice, ingest_prize_sheet, list_award_records, list_draw_dates};
pub use request_response::{
    AwardRecordInfo, CheckInvoiceRequest, CheckInvoiceResponse, IngestPrizeSheetRequest,
    IngestPrizeSheetResponse, ListAwardRecordsResponse, ListDrawDatesResponse,
};
pub use sheet_policy::{SheetPolicy, SheetPolicyError};
