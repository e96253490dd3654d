// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest accepted amount: 2^53 at scale 2, i.e. 90071992547409.92.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0, 1 << 21, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }

    /// Exact match on the persisted `type` text. Anything else is not a
    /// transaction kind this store understands.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "Income" => Some(Kind::Income),
            "Expense" => Some(Kind::Expense),
            _ => None,
        }
    }

    /// +1 for income, -1 for expense.
    pub fn sign(&self) -> Decimal {
        match self {
            Kind::Income => Decimal::ONE,
            Kind::Expense => Decimal::NEGATIVE_ONE,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Kind::Income),
            "expense" => Ok(Kind::Expense),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

/// A stored income or expense entry.
///
/// `date` is kept exactly as stored so that rows with a malformed date can
/// still be listed by id and deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub value: Decimal,
    pub kind: Kind,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl Transaction {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// +value for income, -value for expense.
    pub fn signed_value(&self) -> Decimal {
        self.kind.sign() * self.value
    }
}

/// Validated insert payload. Only `entry` builds these from user input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub value: Decimal,
    pub kind: Kind,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

/// Calendar month with a 1-indexed month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Two-digit month, "01".."12".
    pub fn month_digits(&self) -> String {
        format!("{:02}", self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
