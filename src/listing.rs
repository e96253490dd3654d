// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flattened header/record rows for the transaction listing, and the
//! listing session that decides which rows to show.

use crate::aggregate::{Bucket, Frequency, Totals, compute_totals, group};
use crate::filter::{filter_by_month, sort_by_date_desc, sort_by_id_desc};
use crate::models::{Transaction, YearMonth};
use crate::{settings, store};
use anyhow::{Context, Result};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupHeader {
    pub label: String,
    /// Income minus expense of the records under this header.
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "row", rename_all = "lowercase")]
pub enum Row {
    Header(GroupHeader),
    Record(Transaction),
}

impl Row {
    pub fn as_record(&self) -> Option<&Transaction> {
        match self {
            Row::Record(t) => Some(t),
            Row::Header(_) => None,
        }
    }
}

/// One header per bucket, followed by that bucket's records.
pub fn build_rows(buckets: Vec<Bucket>) -> Vec<Row> {
    let mut rows = Vec::with_capacity(buckets.iter().map(|b| b.records.len() + 1).sum());
    for b in buckets {
        rows.push(Row::Header(GroupHeader {
            label: b.label,
            total: b.total,
        }));
        rows.extend(b.records.into_iter().map(Row::Record));
    }
    rows
}

/// Ungrouped listing: records only, in the order given.
pub fn flat_rows(records: Vec<Transaction>) -> Vec<Row> {
    records.into_iter().map(Row::Record).collect()
}

pub fn records(rows: &[Row]) -> Vec<Transaction> {
    rows.iter().filter_map(Row::as_record).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DeleteOutcome {
    /// The record is not in the listing; nothing was touched.
    NotFound,
    /// The last record is gone; show the empty state.
    Empty,
    Remaining(Totals),
}

/// Delete record `id` from the store and then from `rows`.
///
/// `rows` is only modified after the store delete succeeds. The owning
/// header's total drops by the record's signed value, and a header left with
/// no records is removed.
pub fn delete_row(conn: &Connection, rows: &mut Vec<Row>, id: i64) -> Result<DeleteOutcome> {
    let Some((pos, signed)) = rows.iter().enumerate().find_map(|(i, r)| match r {
        Row::Record(t) if t.id == id => Some((i, t.signed_value())),
        _ => None,
    }) else {
        return Ok(DeleteOutcome::NotFound);
    };

    let removed_from_store = store::delete_by_id(conn, id)
        .with_context(|| format!("Delete transaction {} from listing", id))?;
    if !removed_from_store {
        tracing::warn!(id, "transaction already absent from store; dropping stale row");
    }

    rows.remove(pos);

    let header_pos = rows[..pos]
        .iter()
        .rposition(|r| matches!(r, Row::Header(_)));
    if let Some(h) = header_pos {
        let has_members = matches!(rows.get(h + 1), Some(Row::Record(_)));
        if has_members {
            if let Row::Header(header) = &mut rows[h] {
                header.total -= signed;
            }
        } else {
            rows.remove(h);
        }
    }

    let remaining = records(rows);
    if remaining.is_empty() {
        Ok(DeleteOutcome::Empty)
    } else {
        Ok(DeleteOutcome::Remaining(compute_totals(&remaining)))
    }
}

const VIEW_YEAR_KEY: &str = "view.selected_year";
const VIEW_MONTH_KEY: &str = "view.selected_month";

/// The month the listing is narrowed to, kept between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewPreference {
    pub month: Option<YearMonth>,
}

impl ViewPreference {
    pub fn load(conn: &Connection) -> Result<Self> {
        let year = settings::get(conn, VIEW_YEAR_KEY)?;
        let month = settings::get(conn, VIEW_MONTH_KEY)?;
        let ym = match (year, month) {
            (Some(y), Some(m)) => {
                let parsed = y
                    .parse::<i32>()
                    .ok()
                    .zip(m.parse::<u32>().ok())
                    .and_then(|(y, m)| YearMonth::new(y, m));
                if parsed.is_none() {
                    tracing::warn!(year = %y, month = %m, "ignoring invalid saved view month");
                }
                parsed
            }
            _ => None,
        };
        Ok(Self { month: ym })
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        match self.month {
            Some(ym) => {
                settings::set(conn, VIEW_YEAR_KEY, &ym.year.to_string())?;
                settings::set(conn, VIEW_MONTH_KEY, &ym.month.to_string())
            }
            None => Self::clear(conn),
        }
    }

    pub fn clear(conn: &Connection) -> Result<()> {
        settings::remove(conn, VIEW_YEAR_KEY)?;
        settings::remove(conn, VIEW_MONTH_KEY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListingState {
    Unfiltered,
    FilteredByMonth,
    GroupedDaily,
    GroupedWeekly,
}

/// Serialized as `{"state": "empty"}` or `{"state": "totals", "income": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ListingSummary {
    Empty,
    Totals(Totals),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub rows: Vec<Row>,
    pub summary: ListingSummary,
}

/// What the listing currently shows: an optional month and a grouping.
///
/// The month filter applies in every state, including the grouped ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingSession {
    pub preference: ViewPreference,
    pub frequency: Frequency,
}

impl ListingSession {
    pub fn open(conn: &Connection) -> Result<Self> {
        Ok(Self {
            preference: ViewPreference::load(conn)?,
            frequency: Frequency::None,
        })
    }

    pub fn select_month(&mut self, conn: &Connection, ym: YearMonth) -> Result<()> {
        self.preference.month = Some(ym);
        self.preference.save(conn)
    }

    pub fn reset(&mut self, conn: &Connection) -> Result<()> {
        self.preference.month = None;
        ViewPreference::clear(conn)
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    pub fn state(&self) -> ListingState {
        match (self.frequency, self.preference.month) {
            (Frequency::Daily, _) => ListingState::GroupedDaily,
            (Frequency::Weekly, _) => ListingState::GroupedWeekly,
            (Frequency::None, Some(_)) => ListingState::FilteredByMonth,
            (Frequency::None, None) => ListingState::Unfiltered,
        }
    }

    pub fn render(&self, all: &[Transaction]) -> Listing {
        let scoped = match self.preference.month {
            Some(ym) => filter_by_month(all, ym),
            None => all.to_vec(),
        };
        let rows = match self.state() {
            ListingState::Unfiltered => flat_rows(sort_by_id_desc(&scoped)),
            ListingState::FilteredByMonth => flat_rows(sort_by_date_desc(&scoped)),
            ListingState::GroupedDaily | ListingState::GroupedWeekly => {
                build_rows(group(&scoped, self.frequency))
            }
        };
        let shown = records(&rows);
        let summary = if shown.is_empty() {
            ListingSummary::Empty
        } else {
            ListingSummary::Totals(compute_totals(&shown))
        };
        Listing { rows, summary }
    }

    /// Re-read the store and render.
    pub fn load(&self, conn: &Connection) -> Result<Listing> {
        Ok(self.render(&store::scan_all(conn)?))
    }
}
