// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Award-record queries.
//!
//! Rows are stored as text (tier name, ISO date, JSON number array) and
//! reconstructed into domain types on the way out. A row whose tier
//! name is no longer recognized is skipped with a warning rather than
//! failing the whole snapshot.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::warn;

use fapiao_domain::{AwardRecord, DrawDate, PrizeTier, WinningNumber};

use crate::diesel_schema::award_records;
use crate::error::PersistenceError;

/// Rebuilds reference numbers from the JSON column payload.
fn deserialize_reference_numbers(payload: &str) -> Result<Vec<WinningNumber>, PersistenceError> {
    let values: Vec<String> = serde_json::from_str(payload)?;
    values
        .iter()
        .map(|value| {
            WinningNumber::parse(value).map_err(|e| {
                PersistenceError::ReconstructionError(format!("Invalid stored winning number: {e}"))
            })
        })
        .collect()
}

/// Loads the full award-record snapshot for a draw date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `draw_date` - The draw date to load records for
///
/// # Returns
///
/// All recognized award records for the draw date. The result is empty
/// when no rows exist for the date.
///
/// # Errors
///
/// Returns an error if the query fails or a stored payload cannot be
/// reconstructed into domain types.
pub fn load_award_records(
    conn: &mut SqliteConnection,
    draw_date: &DrawDate,
) -> Result<Vec<AwardRecord>, PersistenceError> {
    let date_text: String = draw_date.to_string();

    let rows: Vec<(String, String)> = award_records::table
        .filter(award_records::draw_date.eq(&date_text))
        .select((award_records::tier, award_records::reference_numbers))
        .load::<(String, String)>(conn)?;

    let mut records: Vec<AwardRecord> = Vec::with_capacity(rows.len());

    for (tier_name, payload) in rows {
        let Ok(tier) = PrizeTier::from_str(&tier_name) else {
            warn!(
                tier = %tier_name,
                draw_date = %date_text,
                "Skipping award record with unrecognized tier"
            );
            continue;
        };

        let numbers: Vec<WinningNumber> = deserialize_reference_numbers(&payload)?;
        records.push(AwardRecord::new(tier, numbers, *draw_date));
    }

    Ok(records)
}

/// Fetches a single award record by tier and draw date.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `tier` - The prize tier to fetch
/// * `draw_date` - The draw date to fetch
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row exists for the
/// (tier, draw date) pair, or an error if the query or payload
/// reconstruction fails.
pub fn get_award_record(
    conn: &mut SqliteConnection,
    tier: PrizeTier,
    draw_date: &DrawDate,
) -> Result<AwardRecord, PersistenceError> {
    let date_text: String = draw_date.to_string();

    let payload: String = award_records::table
        .filter(award_records::draw_date.eq(&date_text))
        .filter(award_records::tier.eq(tier.as_str()))
        .select(award_records::reference_numbers)
        .first::<String>(conn)?;

    let numbers: Vec<WinningNumber> = deserialize_reference_numbers(&payload)?;
    Ok(AwardRecord::new(tier, numbers, *draw_date))
}

/// Lists every draw date with at least one stored award record.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// Distinct draw dates in ascending order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be
/// parsed back into a `DrawDate`.
pub fn list_draw_dates(conn: &mut SqliteConnection) -> Result<Vec<DrawDate>, PersistenceError> {
    let dates: Vec<String> = award_records::table
        .select(award_records::draw_date)
        .distinct()
        .order(award_records::draw_date.asc())
        .load::<String>(conn)?;

    dates
        .iter()
        .map(|date_text| {
            DrawDate::parse(date_text).map_err(|e| {
                PersistenceError::ReconstructionError(format!("Invalid stored draw date: {e}"))
            })
        })
        .collect()
}
