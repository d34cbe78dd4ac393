// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Award-record mutations.
//!
//! The upsert contract: one transaction per ingestion batch, so readers
//! never observe a partial set of tiers for a draw date. Within the
//! batch each record is inserted when absent, rewritten only when its
//! reference numbers differ, and left untouched otherwise.

use diesel::prelude::*;
use diesel::{Connection, SqliteConnection};
use tracing::debug;

use fapiao_domain::{AwardRecord, WinningNumber};

use crate::diesel_schema::award_records;
use crate::error::PersistenceError;

/// Per-batch accounting of what an upsert actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpsertSummary {
    /// Records inserted for the first time.
    pub inserted: usize,
    /// Records whose reference numbers were rewritten.
    pub updated: usize,
    /// Records that already held identical reference numbers.
    pub unchanged: usize,
}

/// Serializes reference numbers into the JSON column payload.
fn serialize_reference_numbers(numbers: &[WinningNumber]) -> Result<String, PersistenceError> {
    let values: Vec<&str> = numbers.iter().map(WinningNumber::value).collect();
    Ok(serde_json::to_string(&values)?)
}

/// Returns the current UTC time as ISO 8601 text.
fn current_timestamp() -> Result<String, PersistenceError> {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}

/// Upserts a batch of award records in a single transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `records` - The normalized award records to upsert
///
/// # Returns
///
/// An `UpsertSummary` with insert/update/unchanged counts for the batch.
///
/// # Errors
///
/// Returns an error if serialization or any database operation fails.
/// On failure the transaction rolls back and nothing from the batch is
/// visible.
pub fn upsert_award_records(
    conn: &mut SqliteConnection,
    records: &[AwardRecord],
) -> Result<UpsertSummary, PersistenceError> {
    conn.transaction::<UpsertSummary, PersistenceError, _>(|conn| {
        let mut summary: UpsertSummary = UpsertSummary::default();

        for record in records {
            let draw_date: String = record.draw_date().to_string();
            let tier: &str = record.tier().as_str();
            let payload: String = serialize_reference_numbers(record.reference_numbers())?;

            let existing: Option<String> = award_records::table
                .filter(award_records::draw_date.eq(&draw_date))
                .filter(award_records::tier.eq(tier))
                .select(award_records::reference_numbers)
                .first::<String>(conn)
                .optional()?;

            match existing {
                None => {
                    let now: String = current_timestamp()?;
                    diesel::insert_into(award_records::table)
                        .values((
                            award_records::draw_date.eq(&draw_date),
                            award_records::tier.eq(tier),
                            award_records::reference_numbers.eq(&payload),
                            award_records::created_at.eq(&now),
                            award_records::updated_at.eq(&now),
                        ))
                        .execute(conn)?;
                    debug!(draw_date, tier, "Inserted award record");
                    summary.inserted += 1;
                }
                Some(current) if current == payload => {
                    summary.unchanged += 1;
                }
                Some(_) => {
                    let now: String = current_timestamp()?;
                    diesel::update(
                        award_records::table
                            .filter(award_records::draw_date.eq(&draw_date))
                            .filter(award_records::tier.eq(tier)),
                    )
                    .set((
                        award_records::reference_numbers.eq(&payload),
                        award_records::updated_at.eq(&now),
                    ))
                    .execute(conn)?;
                    debug!(draw_date, tier, "Updated award record reference numbers");
                    summary.updated += 1;
                }
            }
        }

        Ok(summary)
    })
}
