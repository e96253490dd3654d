// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use spendlog::db;
use spendlog::models::{Kind, NewTransaction, YearMonth};
use spendlog::store;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn new_tx(value: &str, kind: Kind, category: &str, date: &str, description: &str) -> NewTransaction {
    NewTransaction {
        value: dec(value),
        kind,
        category: category.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: description.to_string(),
    }
}

#[test]
fn insert_then_scan_returns_identical_fields() {
    let conn = setup();
    let id = store::insert(
        &conn,
        &new_tx("1200.50", Kind::Expense, "Food & Drink", "2024-03-05", "groceries"),
    )
    .unwrap();

    let all = store::scan_all(&conn).unwrap();
    assert_eq!(all.len(), 1);
    let t = &all[0];
    assert_eq!(t.id, id);
    assert_eq!(t.value, dec("1200.50"));
    assert_eq!(t.kind, Kind::Expense);
    assert_eq!(t.category, "Food & Drink");
    assert_eq!(t.date, "2024-03-05");
    assert_eq!(t.description, "groceries");
}

#[test]
fn inserted_ids_are_unique() {
    let conn = setup();
    let a = store::insert(&conn, &new_tx("1", Kind::Income, "Salary", "2024-03-01", "")).unwrap();
    let b = store::insert(&conn, &new_tx("1", Kind::Income, "Salary", "2024-03-01", "")).unwrap();
    assert_ne!(a, b);
    assert_eq!(store::scan_all(&conn).unwrap().len(), 2);
}

#[test]
fn cent_amounts_survive_the_real_column() {
    let conn = setup();
    for v in ["0.10", "0.20", "19.99", "12345678.91"] {
        store::insert(&conn, &new_tx(v, Kind::Income, "Bonus", "2024-01-01", "")).unwrap();
    }
    let values: Vec<String> = store::scan_all(&conn)
        .unwrap()
        .iter()
        .map(|t| format!("{:.2}", t.value))
        .collect();
    assert_eq!(values, ["0.10", "0.20", "19.99", "12345678.91"]);
}

#[test]
fn delete_twice_is_a_noop_the_second_time() {
    let conn = setup();
    let id = store::insert(&conn, &new_tx("10", Kind::Income, "Salary", "2024-03-01", "")).unwrap();
    assert!(store::delete_by_id(&conn, id).unwrap());
    assert!(!store::delete_by_id(&conn, id).unwrap());
    assert!(store::scan_all(&conn).unwrap().is_empty());
}

#[test]
fn income_check_matches_month_in_any_year() {
    let conn = setup();
    store::insert(&conn, &new_tx("5000", Kind::Income, "Salary", "2023-03-15", "")).unwrap();
    store::insert(&conn, &new_tx("50", Kind::Expense, "Shopping", "2024-04-02", "")).unwrap();

    assert!(store::has_income_in_month(&conn, "03").unwrap());
    // Expenses never count as income.
    assert!(!store::has_income_in_month(&conn, "04").unwrap());

    assert!(store::has_income_in_year_month(&conn, YearMonth::new(2023, 3).unwrap()).unwrap());
    assert!(!store::has_income_in_year_month(&conn, YearMonth::new(2024, 3).unwrap()).unwrap());
}

#[test]
fn scan_skips_rows_with_unknown_type_and_reads_null_description_as_empty() {
    let conn = setup();
    conn.execute_batch(
        "INSERT INTO transactions(value, type, category, date, description)
             VALUES (5, 'Transfer', 'Other', '2024-01-01', NULL);
         INSERT INTO transactions(value, type, category, date, description)
             VALUES (7, 'Income', 'Bonus', '2024-01-02', NULL);",
    )
    .unwrap();
    let all = store::scan_all(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, "Bonus");
    assert_eq!(all[0].description, "");
}

#[test]
fn category_totals_are_sorted_largest_first() {
    let conn = setup();
    store::insert(&conn, &new_tx("20", Kind::Expense, "Shopping", "2024-03-01", "")).unwrap();
    store::insert(&conn, &new_tx("30", Kind::Expense, "Housing", "2024-03-02", "")).unwrap();
    store::insert(&conn, &new_tx("15", Kind::Expense, "Shopping", "2024-03-03", "")).unwrap();
    store::insert(&conn, &new_tx("999", Kind::Income, "Salary", "2024-03-01", "")).unwrap();

    let totals = store::category_totals(&conn, Kind::Expense).unwrap();
    assert_eq!(
        totals,
        vec![
            ("Shopping".to_string(), dec("35")),
            ("Housing".to_string(), dec("30")),
        ]
    );
}

#[test]
fn scan_skips_non_numeric_and_oversized_values() {
    let conn = setup();
    store::insert(&conn, &new_tx("10", Kind::Income, "Salary", "2024-03-01", "")).unwrap();
    conn.execute_batch(
        "INSERT INTO transactions(value, type, category, date, description)
             VALUES ('abc', 'Income', 'Bonus', '2024-03-02', '');
         INSERT INTO transactions(value, type, category, date, description)
             VALUES (5e28, 'Income', 'Bonus', '2024-03-03', '');
         INSERT INTO transactions(value, type, category, date, description)
             VALUES (NULL, 'Expense', 'Other', '2024-03-04', '');
         INSERT INTO transactions(value, type, category, date, description)
             VALUES (4, 'Expense', 'Other', 20240305, NULL);",
    )
    .unwrap();

    let all = store::scan_all(&conn).unwrap();
    let values: Vec<Decimal> = all.iter().map(|t| t.value).collect();
    assert_eq!(values, [dec("10"), dec("4")]);
    // A numeric date is kept as text and simply fails to parse later.
    assert_eq!(all[1].date, "20240305");
    assert!(all[1].parsed_date().is_none());
}

#[test]
fn stored_type_must_match_exactly() {
    let conn = setup();
    conn.execute_batch(
        "INSERT INTO transactions(value, type, category, date, description)
             VALUES (10, 'income', 'Salary', '2024-03-01', '');
         INSERT INTO transactions(value, type, category, date, description)
             VALUES (10, ' Income ', 'Salary', '2024-03-02', '');",
    )
    .unwrap();

    // Neither row is an income to the scan, the income check or the report.
    assert!(store::scan_all(&conn).unwrap().is_empty());
    assert!(!store::has_income_in_month(&conn, "03").unwrap());
    assert!(store::category_totals(&conn, Kind::Income).unwrap().is_empty());
}
