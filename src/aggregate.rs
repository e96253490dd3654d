// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Grouping and totals over an in-memory set of transactions.

use crate::filter::dated;
use crate::models::{DATE_FORMAT, Kind, Transaction};
use crate::utils::{fmt_money, round_money};
use anyhow::{Result, anyhow};
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    None,
    Daily,
    Weekly,
}

impl FromStr for Frequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "sort" => Ok(Frequency::None),
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            other => Err(anyhow!("Unknown frequency '{}' (use none|daily|weekly)", other)),
        }
    }
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

pub fn week_label(start: NaiveDate) -> String {
    format!("Week of {}", start.format(DATE_FORMAT))
}

/// One day or one week of transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub key: NaiveDate,
    pub label: String,
    /// Income minus expense within the bucket.
    pub total: Decimal,
    pub records: Vec<Transaction>,
}

/// Group by day or week. Buckets come back newest first, and records inside a
/// bucket newest first with same-day ties broken by descending id.
///
/// `Frequency::None` yields no buckets. Records with an unparsable date are
/// left out and logged.
pub fn group(records: &[Transaction], frequency: Frequency) -> Vec<Bucket> {
    if frequency == Frequency::None {
        return Vec::new();
    }
    let mut map: BTreeMap<NaiveDate, Vec<(NaiveDate, &Transaction)>> = BTreeMap::new();
    for (date, t) in dated(records) {
        let key = match frequency {
            Frequency::Weekly => week_start(date),
            _ => date,
        };
        map.entry(key).or_default().push((date, t));
    }

    map.into_iter()
        .rev()
        .map(|(key, mut members)| {
            members.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.id.cmp(&a.1.id)));
            let records: Vec<Transaction> = members.into_iter().map(|(_, t)| t.clone()).collect();
            let label = match frequency {
                Frequency::Weekly => week_label(key),
                _ => key.format(DATE_FORMAT).to_string(),
            };
            Bucket {
                key,
                label,
                total: signed_total(&records),
                records,
            }
        })
        .collect()
}

/// Income minus expense.
pub fn signed_total(records: &[Transaction]) -> Decimal {
    records.iter().map(Transaction::signed_value).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

impl Totals {
    pub fn display(&self, marker: &str) -> TotalsDisplay {
        TotalsDisplay {
            income: fmt_money(&self.income, marker),
            expense: fmt_money(&self.expense, marker),
            balance: fmt_money(&self.balance, marker),
        }
    }
}

/// The three strings shown above the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsDisplay {
    pub income: String,
    pub expense: String,
    pub balance: String,
}

/// Sum every record by kind. Dates are not consulted.
pub fn compute_totals(records: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for t in records {
        match t.kind {
            Kind::Income => totals.income += t.value,
            Kind::Expense => totals.expense += t.value,
        }
    }
    totals.balance = totals.income - totals.expense;
    totals
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Decimal,
    /// Share of the kind total, in percent.
    pub percent: Decimal,
}

/// Per-category totals for one kind, largest first, each with its share.
pub fn category_breakdown(records: &[Transaction], kind: Kind) -> Vec<CategoryShare> {
    let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();
    for t in records.iter().filter(|t| t.kind == kind) {
        *sums.entry(t.category.as_str()).or_insert(Decimal::ZERO) += t.value;
    }
    with_shares(sums.into_iter().map(|(c, v)| (c.to_string(), v)).collect())
}

/// Attach percentages to precomputed `(category, total)` pairs.
pub fn with_shares(mut pairs: Vec<(String, Decimal)>) -> Vec<CategoryShare> {
    let grand: Decimal = pairs.iter().map(|(_, v)| *v).sum();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
        .into_iter()
        .map(|(category, total)| {
            let percent = if grand.is_zero() {
                Decimal::ZERO
            } else {
                round_money(total * Decimal::ONE_HUNDRED / grand)
            };
            CategoryShare {
                category,
                total,
                percent,
            }
        })
        .collect()
}
