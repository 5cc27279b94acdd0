use std::fmt;

use rust_decimal::Decimal;

use crate::ledger::{BudgetVariance, Ledger};
use crate::models::{format_amount, format_percent, ExpenseCategory};

/// Point-in-time textual summary of a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Report {
    pub(crate) income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) savings_goal: Decimal,
    pub(crate) remaining_savings: Decimal,
    pub(crate) savings_progress: Option<Decimal>,
    pub(crate) budget: Option<BudgetVariance>,
    /// `(category, amount, share of total in percent)`
    pub(crate) by_category: Vec<(ExpenseCategory, Decimal, Decimal)>,
}

impl Report {
    pub(crate) fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            income: ledger.income(),
            total_expenses: ledger.total_expenses(),
            savings_goal: ledger.savings_goal(),
            remaining_savings: ledger.remaining_savings(),
            savings_progress: ledger.savings_progress_percent(),
            budget: ledger.budget_variance(),
            by_category: ledger
                .expenses_by_category()
                .into_iter()
                .map(|(category, amount)| {
                    let share = ledger.category_share(category).unwrap_or(Decimal::ZERO);
                    (category, amount, share)
                })
                .collect(),
        }
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(str::to_string).collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly Report")?;
        writeln!(f, "Summary of your financial data for this month:")?;
        writeln!(f, "  {:<20}{}", "Total Income:", format_amount(self.income))?;
        writeln!(
            f,
            "  {:<20}{}",
            "Total Expenses:",
            format_amount(self.total_expenses)
        )?;
        writeln!(
            f,
            "  {:<20}{}",
            "Savings Goal:",
            format_amount(self.savings_goal)
        )?;
        writeln!(
            f,
            "  {:<20}{}",
            "Remaining Savings:",
            format_amount(self.remaining_savings)
        )?;
        if let Some(pct) = self.savings_progress {
            writeln!(f, "  {:<20}{}", "Savings Progress:", format_percent(pct))?;
        }
        if let Some(variance) = &self.budget {
            writeln!(f, "  {:<20}{}", "Budget:", format_amount(variance.budget))?;
            writeln!(
                f,
                "  {:<20}{}",
                "Over Budget:",
                format_amount(variance.over_by)
            )?;
        }

        if !self.by_category.is_empty() {
            writeln!(f)?;
            writeln!(f, "Spending by Category:")?;
            for (category, amount, share) in &self.by_category {
                writeln!(
                    f,
                    "  {:<24} {} ({})",
                    category.as_str(),
                    format_amount(*amount),
                    format_percent(*share)
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
