#![allow(clippy::unwrap_used)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use rust_decimal_macros::dec;

use super::*;

const EPS: f64 = 1e-9;

// ── pie_slices ────────────────────────────────────────────────

#[test]
fn test_pie_slices_empty() {
    assert!(pie_slices(&[]).is_empty());
    assert!(pie_slices(&[(ExpenseCategory::Food, dec!(0))]).is_empty());
}

#[test]
fn test_pie_slices_proportions() {
    let slices = pie_slices(&[
        (ExpenseCategory::Food, dec!(100)),
        (ExpenseCategory::Rent, dec!(300)),
    ]);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].category, ExpenseCategory::Food);
    assert!((slices[0].start - 0.0).abs() < EPS);
    assert!((slices[0].end - FRAC_PI_2).abs() < EPS);
    assert!((slices[0].percent - 25.0).abs() < EPS);
    assert!((slices[1].start - FRAC_PI_2).abs() < EPS);
    assert!((slices[1].end - TAU).abs() < EPS);
    assert!((slices[1].percent - 75.0).abs() < EPS);
}

#[test]
fn test_pie_slices_skip_zero_and_close_circle() {
    let slices = pie_slices(&[
        (ExpenseCategory::Food, dec!(1)),
        (ExpenseCategory::Rent, dec!(0)),
        (ExpenseCategory::Other, dec!(2)),
    ]);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[1].category, ExpenseCategory::Other);
    assert_eq!(slices[1].end, TAU);
    let total: f64 = slices.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 1e-6);
}

// ── clock_angle ───────────────────────────────────────────────

#[test]
fn test_clock_angle_quadrants() {
    assert!((clock_angle(0.0, 1.0) - 0.0).abs() < EPS);
    assert!((clock_angle(1.0, 0.0) - FRAC_PI_2).abs() < EPS);
    assert!((clock_angle(0.0, -1.0) - PI).abs() < EPS);
    assert!((clock_angle(-1.0, 0.0) - 3.0 * FRAC_PI_2).abs() < EPS);
}

// ── pie_points ────────────────────────────────────────────────

#[test]
fn test_pie_points_single_slice_fills_disc() {
    let slices = pie_slices(&[(ExpenseCategory::Food, dec!(42))]);
    let groups = pie_points(&slices, 21);
    assert_eq!(groups.len(), 1);
    assert!(!groups[0].is_empty());
    assert!(groups[0].iter().all(|(x, y)| x * x + y * y <= 1.0));
}

#[test]
fn test_pie_points_split_by_half() {
    let slices = pie_slices(&[
        (ExpenseCategory::Food, dec!(50)),
        (ExpenseCategory::Rent, dec!(50)),
    ]);
    let groups = pie_points(&slices, 41);
    // First half of the clock face is the right side of the disc.
    assert!(groups[0].iter().all(|(x, _)| *x >= 0.0));
    assert!(groups[1].iter().all(|(x, _)| *x <= 0.0));
}

#[test]
fn test_pie_points_degenerate_inputs() {
    assert!(pie_points(&[], 50).is_empty());
    let slices = pie_slices(&[(ExpenseCategory::Food, dec!(1))]);
    assert!(pie_points(&slices, 1)[0].is_empty());
}

// ── pie_bounds ────────────────────────────────────────────────

#[test]
fn test_pie_bounds_wide_area() {
    let (x, y) = pie_bounds(80, 20);
    assert_eq!(y, [-1.1, 1.1]);
    assert!((x[1] - 2.2).abs() < EPS);
    assert_eq!(x[0], -x[1]);
}

#[test]
fn test_pie_bounds_narrow_area() {
    let (x, y) = pie_bounds(10, 20);
    assert_eq!(x, [-1.1, 1.1]);
    assert!(y[1] > 1.1);
}

#[test]
fn test_pie_bounds_zero_size() {
    let (x, y) = pie_bounds(0, 0);
    assert!(x[1] >= 1.1 && y[1] >= 1.1);
}
