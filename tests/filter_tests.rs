// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendlog::filter::{filter_by_month, sort_by_date_desc, sort_by_id_desc};
use spendlog::models::{Kind, Transaction, YearMonth};

fn tx(id: i64, date: &str) -> Transaction {
    Transaction {
        id,
        value: Decimal::TEN,
        kind: Kind::Income,
        category: "Salary".into(),
        date: date.into(),
        description: String::new(),
    }
}

fn ids(records: &[Transaction]) -> Vec<i64> {
    records.iter().map(|t| t.id).collect()
}

#[test]
fn month_filter_keeps_exact_year_and_month() {
    let records = vec![
        tx(1, "2024-03-01"),
        tx(2, "2024-03-31"),
        tx(3, "2023-03-15"),
        tx(4, "2024-04-01"),
        tx(5, "2024-02-29"),
    ];
    let march = filter_by_month(&records, YearMonth::new(2024, 3).unwrap());
    assert_eq!(ids(&march), [1, 2]);
}

#[test]
fn month_filter_is_idempotent_subset() {
    let records = vec![tx(1, "2024-12-31"), tx(2, "2025-01-01"), tx(3, "2024-12-01")];
    let dec_2024 = YearMonth::new(2024, 12).unwrap();
    let once = filter_by_month(&records, dec_2024);
    let twice = filter_by_month(&once, dec_2024);
    assert_eq!(once, twice);
    assert!(once.iter().all(|t| records.contains(t)));
}

#[test]
fn month_filter_drops_unparsable_dates() {
    let records = vec![tx(1, "2024-03-01"), tx(2, "2024-3"), tx(3, "not a date")];
    let march = filter_by_month(&records, YearMonth::new(2024, 3).unwrap());
    assert_eq!(ids(&march), [1]);
}

#[test]
fn year_month_rejects_out_of_range_months() {
    assert!(YearMonth::new(2024, 0).is_none());
    assert!(YearMonth::new(2024, 13).is_none());
    assert_eq!(YearMonth::new(2024, 3).unwrap().month_digits(), "03");
    assert_eq!(YearMonth::new(2024, 11).unwrap().to_string(), "2024-11");
}

#[test]
fn date_sort_is_newest_first_with_id_tiebreak_and_skips_bad_dates() {
    let records = vec![
        tx(1, "2024-03-01"),
        tx(2, "2024-03-05"),
        tx(3, "garbage"),
        tx(4, "2024-03-05"),
    ];
    assert_eq!(ids(&sort_by_date_desc(&records)), [4, 2, 1]);
    // Id order keeps every record.
    assert_eq!(ids(&sort_by_id_desc(&records)), [4, 3, 2, 1]);
}
