// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::listing::ListingSession;
use crate::models::YearMonth;
use crate::utils::parse_month;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let mut session = ListingSession::open(conn)?;
    match m.subcommand() {
        Some(("month", sub)) => {
            let raw = sub.get_one::<String>("month").context("month is required")?;
            let ym = parse_month(raw)?;
            session.select_month(conn, ym)?;
            println!("Showing {}", month_title(ym));
        }
        Some(("reset", _)) => {
            session.reset(conn)?;
            println!("Showing all months");
        }
        Some(("show", _)) => match session.preference.month {
            Some(ym) => println!("{}", month_title(ym)),
            None => println!("All months"),
        },
        _ => {}
    }
    Ok(())
}

/// "Mar 2024"
pub fn month_title(ym: YearMonth) -> String {
    NaiveDate::from_ymd_opt(ym.year, ym.month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| ym.to_string())
}
