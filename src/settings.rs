// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const CURRENCY_MARKER_KEY: &str = "currency_marker";
pub const INCOME_GUARD_KEY: &str = "income_guard";
pub const DEFAULT_CURRENCY_MARKER: &str = "P";

pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn remove(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key=?1", params![key])?;
    Ok(())
}

pub fn get_currency_marker(conn: &Connection) -> Result<String> {
    Ok(get(conn, CURRENCY_MARKER_KEY)?.unwrap_or_else(|| DEFAULT_CURRENCY_MARKER.to_string()))
}

pub fn set_currency_marker(conn: &Connection, marker: &str) -> Result<()> {
    set(conn, CURRENCY_MARKER_KEY, marker)
}

/// Policy for the "income before expense" check on expense saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeGuard {
    /// Any income dated in the same calendar month number, in any year.
    #[default]
    AnyYear,
    /// Income dated in the same year and month.
    SameYear,
    Off,
}

impl IncomeGuard {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeGuard::AnyYear => "any-year",
            IncomeGuard::SameYear => "same-year",
            IncomeGuard::Off => "off",
        }
    }
}

impl fmt::Display for IncomeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeGuard {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any-year" => Ok(IncomeGuard::AnyYear),
            "same-year" => Ok(IncomeGuard::SameYear),
            "off" => Ok(IncomeGuard::Off),
            other => Err(anyhow!(
                "Unknown income guard '{}' (use any-year|same-year|off)",
                other
            )),
        }
    }
}

pub fn get_income_guard(conn: &Connection) -> Result<IncomeGuard> {
    match get(conn, INCOME_GUARD_KEY)? {
        Some(v) => v.parse(),
        None => Ok(IncomeGuard::default()),
    }
}

pub fn set_income_guard(conn: &Connection, guard: IncomeGuard) -> Result<()> {
    set(conn, INCOME_GUARD_KEY, guard.as_str())
}
