// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! SQLite-backed record store for the single `transactions` table.

use crate::models::{DATE_FORMAT, Kind, MAX_AMOUNT, NewTransaction, Transaction, YearMonth};
use crate::utils::round_money;
use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Append a record and return its freshly assigned id.
pub fn insert(conn: &Connection, tx: &NewTransaction) -> Result<i64> {
    let value = round_money(tx.value)
        .to_f64()
        .with_context(|| format!("Amount {} does not fit the value column", tx.value))?;
    let date = tx.date.format(DATE_FORMAT).to_string();
    tracing::debug!(kind = %tx.kind, %date, "inserting transaction");
    conn.execute(
        "INSERT INTO transactions(value, type, category, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![value, tx.kind.as_str(), tx.category, date, tx.description],
    )
    .context("Insert transaction")?;
    Ok(conn.last_insert_rowid())
}

/// Every stored record, in table order. Callers sort and filter.
///
/// Rows whose `type` is not exactly `Income` or `Expense`, or whose value is
/// not a number within [`MAX_AMOUNT`], are skipped and logged.
pub fn scan_all(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, value, type, category, date, description FROM transactions ORDER BY id",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;

        let kind = match r.get_ref(2)? {
            ValueRef::Text(b) => std::str::from_utf8(b).ok().and_then(Kind::from_stored),
            _ => None,
        };
        let Some(kind) = kind else {
            tracing::warn!(id, "skipping transaction with unknown type");
            continue;
        };
        let value = match r.get_ref(1)? {
            ValueRef::Real(v) => Decimal::try_from(v).ok(),
            ValueRef::Integer(v) => Some(Decimal::from(v)),
            _ => None,
        }
        .map(round_money)
        .filter(|v| v.abs() <= MAX_AMOUNT);
        let Some(value) = value else {
            tracing::warn!(id, "skipping transaction with unreadable value");
            continue;
        };

        out.push(Transaction {
            id,
            value,
            kind,
            category: text_column(r.get_ref(3)?),
            date: text_column(r.get_ref(4)?),
            description: text_column(r.get_ref(5)?),
        });
    }
    tracing::debug!(count = out.len(), "scanned transactions");
    Ok(out)
}

/// Loose text read: NULL and blobs become empty, numbers their decimal form.
fn text_column(v: ValueRef<'_>) -> String {
    match v {
        ValueRef::Text(b) => String::from_utf8_lossy(b).into_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Null | ValueRef::Blob(_) => String::new(),
    }
}

/// Remove the record with `id`. Returns false when no such record exists.
pub fn delete_by_id(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM transactions WHERE id=?1", params![id])
        .with_context(|| format!("Delete transaction {}", id))?;
    tracing::debug!(id, removed = n, "delete transaction");
    Ok(n > 0)
}

/// True if any income record is dated in calendar month `month_digits`
/// ("01".."12") of any year.
pub fn has_income_in_month(conn: &Connection, month_digits: &str) -> Result<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM transactions WHERE type='Income' AND strftime('%m', date)=?1",
        params![month_digits],
        |r| r.get(0),
    )?;
    tracing::debug!(month = month_digits, found = n > 0, "income check (any year)");
    Ok(n > 0)
}

/// Year-aware counterpart of [`has_income_in_month`].
pub fn has_income_in_year_month(conn: &Connection, ym: YearMonth) -> Result<bool> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM transactions WHERE type='Income' AND strftime('%Y-%m', date)=?1",
        params![ym.to_string()],
        |r| r.get(0),
    )?;
    tracing::debug!(month = %ym, found = n > 0, "income check (same year)");
    Ok(n > 0)
}

/// Per-category sum of `kind` records, largest first.
pub fn category_totals(conn: &Connection, kind: Kind) -> Result<Vec<(String, Decimal)>> {
    let mut stmt = conn.prepare(
        "SELECT COALESCE(category,''), SUM(value) AS total FROM transactions
         WHERE type=?1 GROUP BY category",
    )?;
    let rows = stmt.query_map(params![kind.as_str()], |r| {
        Ok((r.get::<_, String>(0)?, r.get::<_, Option<f64>>(1)?.unwrap_or(0.0)))
    })?;
    let mut data = Vec::new();
    for row in rows {
        let (cat, total_f) = row?;
        match Decimal::try_from(total_f) {
            Ok(total) => data.push((cat, round_money(total))),
            Err(_) => tracing::warn!(category = %cat, total = total_f, "skipping unreadable category total"),
        }
    }
    data.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(data)
}
