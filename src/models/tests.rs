#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

// ── ExpenseCategory ───────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(ExpenseCategory::parse("food"), Some(ExpenseCategory::Food));
    assert_eq!(ExpenseCategory::parse("FOOD"), Some(ExpenseCategory::Food));
    assert_eq!(ExpenseCategory::parse("Rent"), Some(ExpenseCategory::Rent));
    assert_eq!(
        ExpenseCategory::parse("utilities"),
        Some(ExpenseCategory::Utilities)
    );
    assert_eq!(
        ExpenseCategory::parse(" Entertainment "),
        Some(ExpenseCategory::Entertainment)
    );
    assert_eq!(ExpenseCategory::parse("other"), Some(ExpenseCategory::Other));
}

#[test]
fn test_category_parse_rejects_unknown() {
    assert_eq!(ExpenseCategory::parse("groceries"), None);
    assert_eq!(ExpenseCategory::parse(""), None);
}

#[test]
fn test_category_as_str() {
    assert_eq!(ExpenseCategory::Food.as_str(), "Food");
    assert_eq!(ExpenseCategory::Rent.as_str(), "Rent");
    assert_eq!(ExpenseCategory::Utilities.as_str(), "Utilities");
    assert_eq!(ExpenseCategory::Entertainment.as_str(), "Entertainment");
    assert_eq!(ExpenseCategory::Other.as_str(), "Other");
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", ExpenseCategory::Utilities), "Utilities");
}

#[test]
fn test_category_all_in_display_order() {
    let all = ExpenseCategory::all();
    assert_eq!(all.len(), 5);
    assert_eq!(all[0], ExpenseCategory::Food);
    assert_eq!(all[4], ExpenseCategory::Other);
    let mut sorted = all.to_vec();
    sorted.sort();
    assert_eq!(sorted, all);
}

#[test]
fn test_category_roundtrip() {
    for c in ExpenseCategory::all() {
        let s = c.as_str();
        assert_eq!(ExpenseCategory::parse(s), Some(*c), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_names() {
    assert_eq!(
        ExpenseCategory::names(),
        "Food, Rent, Utilities, Entertainment, Other"
    );
}

// ── ExpenseRecord ─────────────────────────────────────────────

#[test]
fn test_record_new() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let rec = ExpenseRecord::new(ExpenseCategory::Food, dec!(12.50), Some(date));
    assert_eq!(rec.category, ExpenseCategory::Food);
    assert_eq!(rec.amount, dec!(12.50));
    assert_eq!(rec.date, Some(date));
}

#[test]
fn test_record_date_label() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let dated = ExpenseRecord::new(ExpenseCategory::Rent, dec!(900), Some(date));
    assert_eq!(dated.date_label(), "2024-03-05");

    let undated = ExpenseRecord::new(ExpenseCategory::Rent, dec!(900), None);
    assert_eq!(undated.date_label(), "-");
}

// ── Money formatting ──────────────────────────────────────────

#[test]
fn test_format_percent_rounds_half_away_from_zero() {
    assert_eq!(format_percent(dec!(99.75)), "100%");
    assert_eq!(format_percent(dec!(99.5)), "100%");
    assert_eq!(format_percent(dec!(0.5)), "1%");
    assert_eq!(format_percent(dec!(12.4)), "12%");
    assert_eq!(format_percent(dec!(20.00)), "20%");
    assert_eq!(format_percent(dec!(0)), "0%");
}

#[test]
fn test_format_amount_shared_with_report() {
    assert_eq!(format_amount(dec!(1234567)), "$1,234,567.00");
    assert_eq!(format_amount(dec!(-42.5)), "-$42.50");
}
