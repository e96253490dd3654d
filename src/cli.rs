// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn entry_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Positive amount, e.g. 1200.50"),
    )
    .arg(Arg::new("category").long("category").required(true))
    .arg(
        Arg::new("date")
            .long("date")
            .required(true)
            .help("YYYY-MM-DD"),
    )
    .arg(Arg::new("description").long("description").default_value(""))
}

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .about("Spendlog: offline income and expense tracker")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Create or migrate the database"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(entry_args(
                    Command::new("add-income").about("Record an income"),
                ))
                .subcommand(entry_args(
                    Command::new("add-expense")
                        .about("Record an expense (requires income in the same month)"),
                ))
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("YYYY-MM; overrides the saved view month for this call"),
                        )
                        .arg(
                            Arg::new("group")
                                .long("group")
                                .default_value("none")
                                .value_parser(["none", "daily", "weekly"]),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("Saved month filter for the listing")
                .subcommand(
                    Command::new("month")
                        .about("Narrow the listing to a month")
                        .arg(Arg::new("month").required(true).help("YYYY-MM")),
                )
                .subcommand(Command::new("reset").about("Show all months again"))
                .subcommand(Command::new("show").about("Print the saved month")),
        )
        .subcommand(
            Command::new("report")
                .about("Totals and category breakdowns")
                .subcommand(json_flags(
                    Command::new("totals")
                        .about("Income, expense and balance")
                        .arg(Arg::new("month").long("month").help("YYYY-MM")),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Totals per category for one kind")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("expense")
                                .value_parser(["income", "expense"]),
                        ),
                )),
        )
        .subcommand(
            Command::new("settings")
                .about("Currency marker and expense income check")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("currency_marker").long("currency-marker"))
                        .arg(
                            Arg::new("income_guard")
                                .long("income-guard")
                                .value_parser(["any-year", "same-year", "off"]),
                        ),
                ),
        )
}
