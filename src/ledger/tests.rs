#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn ledger_with(income: Decimal, goal: Decimal) -> Ledger {
    let mut ledger = Ledger::new();
    ledger.set_income(income).unwrap();
    ledger.set_savings_goal(goal).unwrap();
    ledger
}

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_new_ledger_is_empty() {
    let ledger = Ledger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.income(), Decimal::ZERO);
    assert_eq!(ledger.savings_goal(), Decimal::ZERO);
    assert!(ledger.budget().is_none());
    assert_eq!(ledger.total_expenses(), Decimal::ZERO);
    assert!(ledger.expenses_by_category().is_empty());
    assert!(ledger.cumulative_expenses_over_time().is_empty());
    assert!(ledger.budget_variance().is_none());
    assert!(ledger.savings_progress_percent().is_none());
}

// ── Mutations ─────────────────────────────────────────────────

#[test]
fn test_add_expense_appends_in_order() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense(ExpenseCategory::Rent, dec!(900), date(2024, 1, 1))
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Food, dec!(42.50), None)
        .unwrap();

    let expenses = ledger.expenses();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].category, ExpenseCategory::Rent);
    assert_eq!(expenses[0].date, date(2024, 1, 1));
    assert_eq!(expenses[1].category, ExpenseCategory::Food);
    assert_eq!(expenses[1].amount, dec!(42.50));
    assert!(expenses[1].date.is_none());
}

#[test]
fn test_add_expense_zero_amount_allowed() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense(ExpenseCategory::Other, Decimal::ZERO, None)
        .unwrap();
    assert_eq!(ledger.expenses().len(), 1);
    assert_eq!(
        ledger.expenses_by_category().get(&ExpenseCategory::Other),
        Some(&Decimal::ZERO)
    );
}

#[test]
fn test_add_negative_expense_rejected() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense(ExpenseCategory::Food, dec!(10), None)
        .unwrap();
    let before = ledger.clone();

    let err = ledger
        .add_expense(ExpenseCategory::Food, dec!(-5), None)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::InvalidInput {
            field: "expense amount",
            value: dec!(-5)
        }
    );
    assert_eq!(ledger, before);
}

#[test]
fn test_negative_income_goal_budget_rejected() {
    let mut ledger = ledger_with(dec!(1000), dec!(500));
    ledger.set_budget(dec!(300)).unwrap();
    let before = ledger.clone();

    assert!(ledger.set_income(dec!(-1)).is_err());
    assert!(ledger.set_savings_goal(dec!(-0.01)).is_err());
    assert!(ledger.set_budget(dec!(-300)).is_err());
    assert_eq!(ledger, before);
}

#[test]
fn test_negative_zero_is_accepted() {
    let mut ledger = Ledger::new();
    ledger.set_income(-Decimal::ZERO).unwrap();
    assert!(ledger.income().is_zero());
}

#[test]
fn test_invalid_input_message() {
    let err = LedgerError::InvalidInput {
        field: "income",
        value: dec!(-20),
    };
    assert_eq!(err.to_string(), "income must not be negative (got -20)");
}

#[test]
fn test_expense_that_would_overflow_total_is_rejected() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense(ExpenseCategory::Food, Decimal::MAX, None)
        .unwrap();
    let before = ledger.clone();

    let err = ledger
        .add_expense(ExpenseCategory::Food, dec!(1), None)
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::Overflow {
            field: "expense amount",
            value: dec!(1)
        }
    );
    assert_eq!(ledger, before);
    assert_eq!(ledger.expenses().len(), 1);

    // Aggregations stay usable at the ceiling.
    assert_eq!(ledger.total_expenses(), Decimal::MAX);
    assert_eq!(ledger.remaining_savings(), -Decimal::MAX);
    assert_eq!(ledger.expenses_by_category()[&ExpenseCategory::Food], Decimal::MAX);
    assert_eq!(ledger.cumulative_expenses_over_time().len(), 1);
    assert_eq!(
        ledger.category_share(ExpenseCategory::Food),
        Some(Decimal::ONE_HUNDRED)
    );
}

#[test]
fn test_expense_reaching_exactly_the_ceiling_is_accepted() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense(ExpenseCategory::Rent, Decimal::MAX - dec!(1), None)
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Other, dec!(1), None)
        .unwrap();
    assert_eq!(ledger.total_expenses(), Decimal::MAX);
    assert_eq!(ledger.budget_variance(), None);
}

#[test]
fn test_set_and_clear_budget() {
    let mut ledger = Ledger::new();
    ledger.set_budget(dec!(250)).unwrap();
    assert_eq!(ledger.budget(), Some(dec!(250)));
    ledger.clear_budget();
    assert!(ledger.budget().is_none());
    assert!(ledger.budget_variance().is_none());
}

// ── Totals ────────────────────────────────────────────────────

#[test]
fn test_total_expenses_matches_sum_for_any_grouping() {
    let sequences: [&[Decimal]; 4] = [
        &[dec!(1), dec!(2), dec!(3)],
        &[dec!(0.10), dec!(0.20), dec!(0.30), dec!(99.40)],
        &[dec!(1500)],
        &[dec!(0), dec!(0), dec!(12.345)],
    ];
    for amounts in sequences {
        let mut ledger = Ledger::new();
        for (i, amount) in amounts.iter().enumerate() {
            let category = ExpenseCategory::all()[i % ExpenseCategory::all().len()];
            ledger.add_expense(category, *amount, None).unwrap();
        }
        let expected: Decimal = amounts.iter().sum();
        assert_eq!(ledger.total_expenses(), expected);

        let by_category: Decimal = ledger.expenses_by_category().values().sum();
        assert_eq!(by_category, ledger.total_expenses());
    }
}

#[test]
fn test_decimal_amounts_sum_exactly() {
    let mut ledger = Ledger::new();
    for _ in 0..10 {
        ledger
            .add_expense(ExpenseCategory::Food, dec!(0.1), None)
            .unwrap();
    }
    assert_eq!(ledger.total_expenses(), dec!(1.0));
}

#[test]
fn test_remaining_savings_tracks_income_minus_expenses() {
    let mut ledger = ledger_with(dec!(1000), dec!(0));
    assert_eq!(ledger.remaining_savings(), dec!(1000));

    for amount in [dec!(200), dec!(300), dec!(750)] {
        ledger
            .add_expense(ExpenseCategory::Other, amount, None)
            .unwrap();
        assert_eq!(
            ledger.remaining_savings(),
            ledger.income() - ledger.total_expenses()
        );
    }
    assert_eq!(ledger.remaining_savings(), dec!(-250));
}

// ── Savings progress ──────────────────────────────────────────

#[test]
fn test_savings_progress_scenario_goal_met() {
    let mut ledger = ledger_with(dec!(1000), dec!(500));
    ledger
        .add_expense(ExpenseCategory::Food, dec!(100), None)
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Rent, dec!(400), None)
        .unwrap();

    assert_eq!(ledger.total_expenses(), dec!(500));
    assert_eq!(ledger.remaining_savings(), dec!(500));
    assert_eq!(ledger.savings_progress_percent(), Some(dec!(100)));
}

#[test]
fn test_savings_progress_scenario_overspent_clamps_to_zero() {
    let mut ledger = ledger_with(dec!(1000), dec!(2000));
    ledger
        .add_expense(ExpenseCategory::Food, dec!(1500), None)
        .unwrap();

    assert_eq!(ledger.remaining_savings(), dec!(-500));
    assert_eq!(ledger.savings_progress_percent(), Some(Decimal::ZERO));
}

#[test]
fn test_savings_progress_clamps_above_goal() {
    let ledger = ledger_with(dec!(5000), dec!(1000));
    assert_eq!(ledger.savings_progress_percent(), Some(dec!(100)));
}

#[test]
fn test_savings_progress_partial() {
    let mut ledger = ledger_with(dec!(1000), dec!(800));
    ledger
        .add_expense(ExpenseCategory::Utilities, dec!(600), None)
        .unwrap();
    assert_eq!(ledger.savings_progress_percent(), Some(dec!(50)));
}

#[test]
fn test_savings_progress_undefined_without_goal() {
    let mut ledger = ledger_with(dec!(1000), dec!(0));
    ledger
        .add_expense(ExpenseCategory::Food, dec!(100), None)
        .unwrap();
    assert!(ledger.savings_progress_percent().is_none());
}

#[test]
fn test_savings_progress_always_within_bounds() {
    let incomes = [dec!(0), dec!(10), dec!(999.99), dec!(1000000)];
    let goals = [dec!(0.01), dec!(1), dec!(500), dec!(123456.78)];
    let spends = [dec!(0), dec!(5), dec!(1000), dec!(2000000)];
    for income in incomes {
        for goal in goals {
            for spend in spends {
                let mut ledger = ledger_with(income, goal);
                ledger
                    .add_expense(ExpenseCategory::Other, spend, None)
                    .unwrap();
                let pct = ledger.savings_progress_percent().unwrap();
                assert!(
                    pct >= Decimal::ZERO && pct <= dec!(100),
                    "{pct} out of range for income={income} goal={goal} spend={spend}"
                );
            }
        }
    }
}

#[test]
fn test_savings_progress_extreme_ratio_does_not_overflow() {
    let ledger = ledger_with(Decimal::MAX, dec!(0.0000000001));
    assert_eq!(ledger.savings_progress_percent(), Some(dec!(100)));
}

// ── Category breakdown ────────────────────────────────────────

#[test]
fn test_expenses_by_category_groups_and_orders() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense(ExpenseCategory::Other, dec!(5), None)
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Food, dec!(20), None)
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Food, dec!(30), None)
        .unwrap();

    let grouped: Vec<_> = ledger.expenses_by_category().into_iter().collect();
    assert_eq!(
        grouped,
        vec![
            (ExpenseCategory::Food, dec!(50)),
            (ExpenseCategory::Other, dec!(5)),
        ]
    );
}

#[test]
fn test_category_share() {
    let mut ledger = Ledger::new();
    assert!(ledger.category_share(ExpenseCategory::Food).is_none());

    ledger
        .add_expense(ExpenseCategory::Food, dec!(25), None)
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Rent, dec!(75), None)
        .unwrap();
    assert_eq!(ledger.category_share(ExpenseCategory::Food), Some(dec!(25)));
    assert_eq!(ledger.category_share(ExpenseCategory::Rent), Some(dec!(75)));
    assert_eq!(
        ledger.category_share(ExpenseCategory::Utilities),
        Some(Decimal::ZERO)
    );
}

// ── Cumulative ────────────────────────────────────────────────

#[test]
fn test_cumulative_keeps_insertion_order() {
    let mut ledger = Ledger::new();
    ledger
        .add_expense(ExpenseCategory::Food, dec!(10), date(2024, 2, 10))
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Rent, dec!(100), date(2024, 1, 1))
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Other, dec!(5.5), None)
        .unwrap();

    assert_eq!(
        ledger.cumulative_expenses_over_time(),
        vec![
            (date(2024, 2, 10), dec!(10)),
            (date(2024, 1, 1), dec!(110)),
            (None, dec!(115.5)),
        ]
    );
}

#[test]
fn test_cumulative_last_point_is_total() {
    let mut ledger = Ledger::new();
    for amount in [dec!(3), dec!(4), dec!(5)] {
        ledger
            .add_expense(ExpenseCategory::Food, amount, None)
            .unwrap();
    }
    let points = ledger.cumulative_expenses_over_time();
    assert_eq!(points.last().map(|(_, t)| *t), Some(ledger.total_expenses()));
}

// ── Budget variance ───────────────────────────────────────────

#[test]
fn test_budget_variance_over() {
    let mut ledger = Ledger::new();
    ledger.set_budget(dec!(300)).unwrap();
    ledger
        .add_expense(ExpenseCategory::Food, dec!(100), None)
        .unwrap();
    ledger
        .add_expense(ExpenseCategory::Rent, dec!(400), None)
        .unwrap();

    let variance = ledger.budget_variance().unwrap();
    assert_eq!(
        variance,
        BudgetVariance {
            budget: dec!(300),
            actual: dec!(500),
            over_by: dec!(200),
        }
    );
    assert!(variance.is_over());
}

#[test]
fn test_budget_variance_under() {
    let mut ledger = Ledger::new();
    ledger.set_budget(dec!(300)).unwrap();
    ledger
        .add_expense(ExpenseCategory::Food, dec!(120), None)
        .unwrap();

    let variance = ledger.budget_variance().unwrap();
    assert_eq!(variance.actual, dec!(120));
    assert_eq!(variance.over_by, Decimal::ZERO);
    assert!(!variance.is_over());
}

#[test]
fn test_budget_variance_exactly_on_budget() {
    let mut ledger = Ledger::new();
    ledger.set_budget(dec!(50)).unwrap();
    ledger
        .add_expense(ExpenseCategory::Entertainment, dec!(50), None)
        .unwrap();
    assert_eq!(ledger.budget_variance().unwrap().over_by, Decimal::ZERO);
}
