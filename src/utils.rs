// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DATE_FORMAT, YearMonth};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use serde_json::Value;

pub fn parse_month(s: &str) -> Result<YearMonth> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), DATE_FORMAT)
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(YearMonth::of(d))
}

/// Currency amounts carry two decimal places, half away from zero.
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_money(d: &Decimal, marker: &str) -> String {
    format!("{}{:.2}", marker, round_money(*d))
}

/// Build a table for terminal output. Columns listed in `numeric` are
/// right-aligned.
pub fn table(headers: &[&str], rows: Vec<Vec<String>>, numeric: &[usize]) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r);
    }
    for &i in numeric {
        if let Some(col) = t.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    t
}

/// Machine-readable output requested with `--json` or `--jsonl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonMode {
    Pretty,
    Lines,
}

impl JsonMode {
    pub fn from_matches(m: &ArgMatches) -> Option<Self> {
        if m.get_flag("json") {
            Some(JsonMode::Pretty)
        } else if m.get_flag("jsonl") {
            Some(JsonMode::Lines)
        } else {
            None
        }
    }
}

/// One compact document per line. Top-level arrays are split into their
/// elements.
pub fn json_lines<T: Serialize>(v: &T) -> Result<Vec<String>> {
    match serde_json::to_value(v)? {
        Value::Array(items) => items
            .iter()
            .map(|item| serde_json::to_string(item).map_err(anyhow::Error::from))
            .collect(),
        other => Ok(vec![serde_json::to_string(&other)?]),
    }
}

pub fn print_json<T: Serialize>(mode: JsonMode, v: &T) -> Result<()> {
    match mode {
        JsonMode::Pretty => println!("{}", serde_json::to_string_pretty(v)?),
        JsonMode::Lines => {
            for line in json_lines(v)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
