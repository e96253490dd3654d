// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{Frequency, Totals};
use crate::entry::{EntryInput, save_expense, save_income};
use crate::listing::{DeleteOutcome, Listing, ListingSession, ListingSummary, Row, delete_row};
use crate::models::Kind;
use crate::settings::{get_currency_marker, get_income_guard};
use crate::utils::{JsonMode, fmt_money, parse_month, print_json, table};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add-income", sub)) => add(conn, sub, Kind::Income)?,
        Some(("add-expense", sub)) => add(conn, sub, Kind::Expense)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn arg(sub: &clap::ArgMatches, name: &str) -> String {
    sub.get_one::<String>(name).cloned().unwrap_or_default()
}

pub fn entry_input(sub: &clap::ArgMatches) -> EntryInput {
    EntryInput {
        amount: arg(sub, "amount"),
        category: arg(sub, "category"),
        date: arg(sub, "date"),
        description: arg(sub, "description"),
    }
}

fn add(conn: &Connection, sub: &clap::ArgMatches, kind: Kind) -> Result<()> {
    let input = entry_input(sub);
    let id = match kind {
        Kind::Income => save_income(conn, &input)?,
        Kind::Expense => save_expense(conn, &input, get_income_guard(conn)?)?,
    };
    println!(
        "Recorded {} #{}: {} {} on {}",
        kind.as_str().to_lowercase(),
        id,
        input.amount.trim(),
        input.category.trim(),
        input.date.trim()
    );
    Ok(())
}

/// The listing `tx list` would print, without printing it.
pub fn query_listing(conn: &Connection, sub: &clap::ArgMatches) -> Result<Listing> {
    let mut session = ListingSession::open(conn)?;
    if let Some(month) = sub.get_one::<String>("month") {
        session.preference.month = Some(parse_month(month)?);
    }
    let frequency = match sub.get_one::<String>("group") {
        Some(g) => g.parse::<Frequency>()?,
        None => Frequency::None,
    };
    session.set_frequency(frequency);
    session.load(conn)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let listing = query_listing(conn, sub)?;
    if let Some(mode) = JsonMode::from_matches(sub) {
        return print_json(mode, &listing);
    }
    let marker = get_currency_marker(conn)?;
    match listing.summary {
        ListingSummary::Empty => print_empty_state(&marker),
        ListingSummary::Totals(totals) => {
            println!("{}", render_rows(&listing.rows, &marker));
            print_totals(&totals, &marker);
        }
    }
    Ok(())
}

fn render_rows(rows: &[Row], marker: &str) -> comfy_table::Table {
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|row| match row {
            Row::Header(h) => vec![
                String::new(),
                h.label.clone(),
                String::new(),
                String::new(),
                fmt_money(&h.total, marker),
                String::new(),
            ],
            Row::Record(t) => vec![
                t.id.to_string(),
                t.date.clone(),
                t.kind.to_string(),
                t.category.clone(),
                fmt_money(&t.value, marker),
                t.description.clone(),
            ],
        })
        .collect();
    table(
        &["ID", "Date", "Type", "Category", "Amount", "Description"],
        data,
        &[0, 4],
    )
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").context("--id is required")?;
    let session = ListingSession::open(conn)?;
    let mut rows = session.load(conn)?.rows;
    let marker = get_currency_marker(conn)?;
    match delete_row(conn, &mut rows, id)? {
        DeleteOutcome::NotFound => println!("Transaction {} not found in the current view", id),
        DeleteOutcome::Empty => {
            println!("Transaction deleted");
            print_empty_state(&marker);
        }
        DeleteOutcome::Remaining(totals) => {
            println!("Transaction deleted");
            print_totals(&totals, &marker);
        }
    }
    Ok(())
}

fn print_totals(totals: &Totals, marker: &str) {
    let d = totals.display(marker);
    println!(
        "{}",
        table(
            &["Income", "Expense", "Balance"],
            vec![vec![d.income, d.expense, d.balance]],
            &[0, 1, 2],
        )
    );
}

fn print_empty_state(marker: &str) {
    println!("No transactions to show.");
    print_totals(&Totals::default(), marker);
}
