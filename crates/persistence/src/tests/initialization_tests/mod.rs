// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Initialization (`SQLite` in-memory, migrations, foreign key
//! enforcement) is also exercised implicitly by every award-store test
//! that calls `SqlitePersistence::new_in_memory()`. The tests here pin
//! the explicit contract: construction succeeds, instances are
//! isolated, and the schema exists after migrations.

use crate::SqlitePersistence;
use crate::tests::{create_test_batch, create_test_draw_date};

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, crate::error::PersistenceError> =
        SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_verification() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    // Each in-memory instance should be isolated
    let mut db1 = SqlitePersistence::new_in_memory().unwrap();
    let mut db2 = SqlitePersistence::new_in_memory().unwrap();

    db1.upsert_award_records(&create_test_batch()).unwrap();

    let records1 = db1.load_award_records(&create_test_draw_date()).unwrap();
    let records2 = db2.load_award_records(&create_test_draw_date()).unwrap();

    assert_eq!(records1.len(), 4, "db1 should hold the ingested batch");
    assert!(records2.is_empty(), "db2 should see no records (isolated)");
}

#[test]
fn test_migrations_applied_on_initialization() {
    // If migrations didn't run, the schema wouldn't exist and this would fail
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.list_draw_dates();

    assert!(
        result.is_ok(),
        "Migrations must have applied for award_records table to exist"
    );
}
