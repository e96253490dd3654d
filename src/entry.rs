// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Validate raw form input and save it as an income or expense.

use crate::error::EntryError;
use crate::models::{DATE_FORMAT, Kind, MAX_AMOUNT, NewTransaction, YearMonth};
use crate::settings::IncomeGuard;
use crate::store;
use crate::utils::round_money;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// Unvalidated fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

/// Check `input` in order: amount, category, date presence, date format.
pub fn validate(input: &EntryInput, kind: Kind) -> Result<NewTransaction, EntryError> {
    let amount = input.amount.trim();
    let value = amount
        .parse::<Decimal>()
        .ok()
        .map(round_money)
        .filter(|v| *v > Decimal::ZERO && *v <= MAX_AMOUNT)
        .ok_or_else(|| EntryError::InvalidAmount(amount.to_string()))?;

    let category = input.category.trim();
    if category.is_empty() {
        return Err(EntryError::MissingCategory);
    }
    let date_raw = input.date.trim();
    if date_raw.is_empty() {
        return Err(EntryError::MissingDate);
    }
    let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
        .map_err(|_| EntryError::InvalidDate(date_raw.to_string()))?;

    Ok(NewTransaction {
        value,
        kind,
        category: category.to_string(),
        date,
        description: input.description.trim().to_string(),
    })
}

pub fn save_income(conn: &Connection, input: &EntryInput) -> Result<i64> {
    let tx = validate(input, Kind::Income)?;
    let id = store::insert(conn, &tx)?;
    tracing::info!(id, value = %tx.value, category = %tx.category, "saved income");
    Ok(id)
}

/// Save an expense once `guard` is satisfied.
///
/// The income check and the insert are two separate store calls.
pub fn save_expense(conn: &Connection, input: &EntryInput, guard: IncomeGuard) -> Result<i64> {
    let tx = validate(input, Kind::Expense)?;
    let ym = YearMonth::of(tx.date);
    let has_income = match guard {
        IncomeGuard::AnyYear => store::has_income_in_month(conn, &ym.month_digits())?,
        IncomeGuard::SameYear => store::has_income_in_year_month(conn, ym)?,
        IncomeGuard::Off => true,
    };
    if !has_income {
        let shown = match guard {
            IncomeGuard::AnyYear => ym.month_digits(),
            _ => ym.to_string(),
        };
        tracing::info!(month = %shown, %guard, "expense rejected: no income in month");
        return Err(EntryError::NoIncomeInMonth(shown).into());
    }
    let id = store::insert(conn, &tx)?;
    tracing::info!(id, value = %tx.value, category = %tx.category, "saved expense");
    Ok(id)
}
