// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, YearMonth};
use chrono::NaiveDate;

/// Records dated within `ym`. Records whose date does not parse are dropped
/// and logged.
pub fn filter_by_month(records: &[Transaction], ym: YearMonth) -> Vec<Transaction> {
    records
        .iter()
        .filter(|t| match t.parsed_date() {
            Some(d) => ym.contains(d),
            None => {
                tracing::warn!(id = t.id, date = %t.date, "excluding transaction with unparsable date from month filter");
                false
            }
        })
        .cloned()
        .collect()
}

/// Pair each record with its parsed date, dropping (and logging) the rest.
pub fn dated(records: &[Transaction]) -> Vec<(NaiveDate, &Transaction)> {
    records
        .iter()
        .filter_map(|t| match t.parsed_date() {
            Some(d) => Some((d, t)),
            None => {
                tracing::warn!(id = t.id, date = %t.date, "excluding transaction with unparsable date");
                None
            }
        })
        .collect()
}

/// Most recent first; same-day records by descending id.
pub fn sort_by_date_desc(records: &[Transaction]) -> Vec<Transaction> {
    let mut keyed = dated(records);
    keyed.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.id.cmp(&a.1.id)));
    keyed.into_iter().map(|(_, t)| t.clone()).collect()
}

/// Most recently created first. Does not look at dates.
pub fn sort_by_id_desc(records: &[Transaction]) -> Vec<Transaction> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| b.id.cmp(&a.id));
    out
}
