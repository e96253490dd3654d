// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.spendlog", "Spendlog", "spendlog"));

pub const DB_ENV: &str = "SPENDLOG_DB";

/// Schema version written to `PRAGMA user_version`.
///
/// 1: transactions(id, value, type, category, date)
/// 2: adds transactions.description
pub const SCHEMA_VERSION: i64 = 2;

pub fn db_path() -> Result<PathBuf> {
    if let Some(p) = std::env::var_os(DB_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("spendlog.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    open_at(&db_path()?)
}

pub fn open_at(path: &Path) -> Result<Connection> {
    let mut conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn schema_version(conn: &Connection) -> Result<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(v)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;

    let mut version = schema_version(conn)?;
    if version > SCHEMA_VERSION {
        bail!(
            "Database schema version {} is newer than this build supports ({})",
            version,
            SCHEMA_VERSION
        );
    }

    let has_table = table_exists(conn, "transactions")?;
    if version == 0 && has_table {
        // Pre-versioned file from the description-less layout.
        version = if has_column(conn, "transactions", "description")? {
            SCHEMA_VERSION
        } else {
            1
        };
    }

    let tx = conn.transaction()?;
    if !has_table {
        tx.execute_batch(
            r#"
        CREATE TABLE transactions(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            value REAL,
            type TEXT,
            category TEXT,
            date TEXT,
            description TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
        "#,
        )?;
        tracing::info!("Created transactions table at schema version {}", SCHEMA_VERSION);
    } else if version < 2 {
        tx.execute_batch("ALTER TABLE transactions ADD COLUMN description TEXT;")
            .context("Migrate transactions to schema version 2")?;
        tracing::info!("Migrated transactions table from version {} to 2", version);
    }
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |r| r.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let mut rows = stmt.query([])?;
    while let Some(r) = rows.next()? {
        let name: String = r.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
