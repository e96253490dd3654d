// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use spendlog::db;
use spendlog::models::{Kind, NewTransaction};
use spendlog::store;
use tempfile::tempdir;

const LEGACY_SCHEMA: &str = r#"
    CREATE TABLE transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        value REAL,
        type TEXT,
        category TEXT,
        date TEXT
    );
    INSERT INTO transactions(value, type, category, date)
        VALUES (250.5, 'Income', 'Allowance', '2023-11-02');
"#;

#[test]
fn fresh_database_is_at_current_version() {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    assert_eq!(db::schema_version(&conn).unwrap(), db::SCHEMA_VERSION);
    // Idempotent on a second run.
    db::init_schema(&mut conn).unwrap();
    assert_eq!(db::schema_version(&conn).unwrap(), db::SCHEMA_VERSION);
}

#[test]
fn version_one_file_gains_description_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();
        conn.pragma_update(None, "user_version", 1).unwrap();
    }

    let conn = db::open_at(&path).unwrap();
    assert_eq!(db::schema_version(&conn).unwrap(), 2);
    let all = store::scan_all(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].value, Decimal::from_str_exact("250.5").unwrap());
    assert_eq!(all[0].description, "");
}

#[test]
fn unversioned_legacy_table_is_detected_by_columns() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(LEGACY_SCHEMA).unwrap();
    db::init_schema(&mut conn).unwrap();

    store::insert(
        &conn,
        &NewTransaction {
            value: Decimal::TEN,
            kind: Kind::Expense,
            category: "Other".into(),
            date: NaiveDate::from_ymd_opt(2023, 11, 3).unwrap(),
            description: "after upgrade".into(),
        },
    )
    .unwrap();
    let all = store::scan_all(&conn).unwrap();
    assert_eq!(all[1].description, "after upgrade");
}

#[test]
fn newer_schema_is_refused() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "user_version", 9).unwrap();
    let err = db::init_schema(&mut conn).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn writes_persist_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spendlog.sqlite");
    {
        let conn = db::open_at(&path).unwrap();
        store::insert(
            &conn,
            &NewTransaction {
                value: Decimal::from(5000),
                kind: Kind::Income,
                category: "Salary".into(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                description: String::new(),
            },
        )
        .unwrap();
    }
    let conn = db::open_at(&path).unwrap();
    let all = store::scan_all(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, "Salary");
}
