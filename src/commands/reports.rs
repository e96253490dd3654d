// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{CategoryShare, Totals, category_breakdown, compute_totals, with_shares};
use crate::filter::filter_by_month;
use crate::models::Kind;
use crate::settings::get_currency_marker;
use crate::store;
use crate::utils::{JsonMode, fmt_money, parse_month, print_json, table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("totals", sub)) => totals(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn query_totals(conn: &Connection, sub: &clap::ArgMatches) -> Result<Totals> {
    let all = store::scan_all(conn)?;
    let scoped = match sub.get_one::<String>("month") {
        Some(m) => filter_by_month(&all, parse_month(m)?),
        None => all,
    };
    Ok(compute_totals(&scoped))
}

fn totals(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let totals = query_totals(conn, sub)?;
    let marker = get_currency_marker(conn)?;
    let shown = totals.display(&marker);
    if let Some(mode) = JsonMode::from_matches(sub) {
        return print_json(mode, &shown);
    }
    println!(
        "{}",
        table(
            &["Income", "Expense", "Balance"],
            vec![vec![shown.income, shown.expense, shown.balance]],
            &[0, 1, 2],
        )
    );
    Ok(())
}

/// Category shares for `--kind`, optionally within `--month`.
pub fn query_categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<CategoryShare>> {
    let kind = sub
        .get_one::<String>("kind")
        .map(|k| k.parse::<Kind>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or(Kind::Expense);
    match sub.get_one::<String>("month") {
        Some(m) => {
            let all = store::scan_all(conn)?;
            Ok(category_breakdown(&filter_by_month(&all, parse_month(m)?), kind))
        }
        None => Ok(with_shares(store::category_totals(conn, kind)?)),
    }
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_categories(conn, sub)?;
    if let Some(mode) = JsonMode::from_matches(sub) {
        return print_json(mode, &data);
    }
    if data.is_empty() {
        println!("No transactions to break down.");
        return Ok(());
    }
    let marker = get_currency_marker(conn)?;
    let rows = data
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.total, &marker),
                format!("{:.2}%", c.percent),
            ]
        })
        .collect();
    println!("{}", table(&["Category", "Total", "Share"], rows, &[1, 2]));
    Ok(())
}
