// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Fapiao prize-checking service.
//!
//! This crate stores normalized award records keyed by `(draw_date, tier)`
//! and serves snapshot reads for prize matching. It is built on Diesel
//! with `SQLite` as the only backend.
//!
//! ## Storage Model
//!
//! Each row holds one prize tier's reference numbers for one draw date,
//! serialized as a JSON array of digit strings. Re-ingesting a prize
//! sheet is idempotent: rows are rewritten only when their reference
//! numbers actually changed, and each ingestion batch commits in a
//! single transaction so readers never observe a partial tier set.
//!
//! ## Backend
//!
//! `SQLite` is the sole backend:
//! - In-memory databases for unit and integration tests
//! - File-based databases (with WAL mode) for deployments
//!
//! Connection setup, migrations, and PRAGMA configuration live in the
//! `backend` module; all queries and mutations use Diesel DSL only.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against in-memory `SQLite`
//! - Each test database receives a unique name via atomic counter
//! - Tests fail fast if migrations or PRAGMA setup are broken

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use fapiao_domain::{AwardRecord, DrawDate, PrizeTier};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::UpsertSummary;

/// Type alias for backward compatibility.
/// All new code should use `Persistence` directly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter for award records.
///
/// Owns a single `SQLite` connection. Construction runs migrations and
/// verifies foreign key enforcement before any caller can touch data.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Uses a shared in-memory database via `Diesel`.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Upserts a batch of award records in a single transaction.
    ///
    /// Records are inserted when absent, rewritten only when their
    /// reference numbers differ, and left untouched otherwise.
    ///
    /// # Arguments
    ///
    /// * `records` - The normalized award records to upsert
    ///
    /// # Returns
    ///
    /// An `UpsertSummary` with insert/update/unchanged counts.
    ///
    /// # Errors
    ///
    /// Returns an error if any database operation fails. On failure the
    /// transaction rolls back and nothing from the batch is visible.
    pub fn upsert_award_records(
        &mut self,
        records: &[AwardRecord],
    ) -> Result<UpsertSummary, PersistenceError> {
        mutations::awards::upsert_award_records(&mut self.conn, records)
    }

    /// Loads the full award-record snapshot for a draw date.
    ///
    /// # Arguments
    ///
    /// * `draw_date` - The draw date to load records for
    ///
    /// # Returns
    ///
    /// All recognized award records for the draw date; empty when no
    /// rows exist for the date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored payload cannot
    /// be reconstructed into domain types.
    pub fn load_award_records(
        &mut self,
        draw_date: &DrawDate,
    ) -> Result<Vec<AwardRecord>, PersistenceError> {
        queries::awards::load_award_records(&mut self.conn, draw_date)
    }

    /// Fetches a single award record by tier and draw date.
    ///
    /// # Arguments
    ///
    /// * `tier` - The prize tier to fetch
    /// * `draw_date` - The draw date to fetch
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no row exists for the
    /// (tier, draw date) pair.
    pub fn get_award_record(
        &mut self,
        tier: PrizeTier,
        draw_date: &DrawDate,
    ) -> Result<AwardRecord, PersistenceError> {
        queries::awards::get_award_record(&mut self.conn, tier, draw_date)
    }

    /// Lists every draw date with at least one stored award record.
    ///
    /// # Returns
    ///
    /// Distinct draw dates in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored date cannot be
    /// parsed back into a `DrawDate`.
    pub fn list_draw_dates(&mut self) -> Result<Vec<DrawDate>, PersistenceError> {
        queries::awards::list_draw_dates(&mut self.conn)
    }
}
