// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::settings::{
    IncomeGuard, get_currency_marker, get_income_guard, set_currency_marker, set_income_guard,
};
use crate::utils::table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(conn)?,
        Some(("set", sub)) => {
            if let Some(marker) = sub.get_one::<String>("currency_marker") {
                set_currency_marker(conn, marker.trim())?;
                println!("Currency marker set to '{}'", marker.trim());
            }
            if let Some(guard) = sub.get_one::<String>("income_guard") {
                let guard: IncomeGuard = guard.parse()?;
                set_income_guard(conn, guard)?;
                println!("Income guard set to {}", guard);
            }
        }
        _ => {}
    }
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let rows = vec![
        vec!["currency_marker".to_string(), get_currency_marker(conn)?],
        vec![
            "income_guard".to_string(),
            get_income_guard(conn)?.to_string(),
        ],
    ];
    println!("{}", table(&["Setting", "Value"], rows, &[]));
    Ok(())
}
