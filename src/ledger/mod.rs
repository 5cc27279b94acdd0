mod error;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{ExpenseCategory, ExpenseRecord};

pub use error::LedgerError;

/// Budget ceiling compared against what was actually spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetVariance {
    pub budget: Decimal,
    pub actual: Decimal,
    /// `max(0, actual - budget)`
    pub over_by: Decimal,
}

impl BudgetVariance {
    pub fn is_over(&self) -> bool {
        self.over_by > Decimal::ZERO
    }
}

/// In-session finance state: income, savings goal, optional budget ceiling and
/// the expenses recorded so far, in insertion order.
///
/// Every amount held here is non-negative and the expense total always fits in
/// a `Decimal`. Mutations that would break either are rejected with a
/// [`LedgerError`] and leave the ledger untouched, so the aggregations below
/// never overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    income: Decimal,
    savings_goal: Decimal,
    budget: Option<Decimal>,
    expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ─────────────────────────────────────────────

    pub fn set_income(&mut self, income: Decimal) -> Result<(), LedgerError> {
        ensure_non_negative("income", income)?;
        debug!(%income, "income set");
        self.income = income;
        Ok(())
    }

    pub fn set_savings_goal(&mut self, goal: Decimal) -> Result<(), LedgerError> {
        ensure_non_negative("savings goal", goal)?;
        debug!(%goal, "savings goal set");
        self.savings_goal = goal;
        Ok(())
    }

    pub fn set_budget(&mut self, budget: Decimal) -> Result<(), LedgerError> {
        ensure_non_negative("budget", budget)?;
        debug!(%budget, "budget set");
        self.budget = Some(budget);
        Ok(())
    }

    pub fn clear_budget(&mut self) {
        debug!("budget cleared");
        self.budget = None;
    }

    pub fn add_expense(
        &mut self,
        category: ExpenseCategory,
        amount: Decimal,
        date: Option<NaiveDate>,
    ) -> Result<(), LedgerError> {
        ensure_non_negative("expense amount", amount)?;
        if self.total_expenses().checked_add(amount).is_none() {
            warn!(%amount, "rejected expense: total would overflow");
            return Err(LedgerError::Overflow {
                field: "expense amount",
                value: amount,
            });
        }
        debug!(%category, %amount, ?date, "expense recorded");
        self.expenses.push(ExpenseRecord::new(category, amount, date));
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn income(&self) -> Decimal {
        self.income
    }

    pub fn savings_goal(&self) -> Decimal {
        self.savings_goal
    }

    pub fn budget(&self) -> Option<Decimal> {
        self.budget
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    // ── Aggregations ──────────────────────────────────────────

    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus total expenses. Negative when overspent; never clamped.
    pub fn remaining_savings(&self) -> Decimal {
        self.income - self.total_expenses()
    }

    /// Remaining savings as a percentage of the goal, clamped to `[0, 100]`.
    /// `None` when no goal is set.
    pub fn savings_progress_percent(&self) -> Option<Decimal> {
        if self.savings_goal.is_zero() {
            return None;
        }
        let remaining = self.remaining_savings();
        let percent = remaining
            .checked_div(self.savings_goal)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            // Only reachable with astronomically large inputs; the sign decides the clamp.
            .unwrap_or(if remaining.is_sign_negative() {
                Decimal::ZERO
            } else {
                Decimal::ONE_HUNDRED
            });
        Some(percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Summed amount per category, for categories with at least one record.
    pub fn expenses_by_category(&self) -> BTreeMap<ExpenseCategory, Decimal> {
        let mut totals: BTreeMap<ExpenseCategory, Decimal> = BTreeMap::new();
        for expense in &self.expenses {
            let slot = totals.entry(expense.category).or_insert(Decimal::ZERO);
            *slot = slot.saturating_add(expense.amount);
        }
        totals
    }

    /// Share of total spending that went to `category`, in percent.
    pub fn category_share(&self, category: ExpenseCategory) -> Option<Decimal> {
        let total = self.total_expenses();
        if total.is_zero() {
            return None;
        }
        let spent = self
            .expenses_by_category()
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO);
        Some(spent / total * Decimal::ONE_HUNDRED)
    }

    /// Running total of expenses in insertion order (records are not re-sorted by date).
    pub fn cumulative_expenses_over_time(&self) -> Vec<(Option<NaiveDate>, Decimal)> {
        let mut running = Decimal::ZERO;
        self.expenses
            .iter()
            .map(|e| {
                running += e.amount;
                (e.date, running)
            })
            .collect()
    }

    /// Budget versus actual spending. `None` until a budget ceiling is set.
    pub fn budget_variance(&self) -> Option<BudgetVariance> {
        let budget = self.budget?;
        let actual = self.total_expenses();
        Some(BudgetVariance {
            budget,
            actual,
            over_by: (actual - budget).max(Decimal::ZERO),
        })
    }
}

fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<(), LedgerError> {
    if value < Decimal::ZERO {
        warn!(field, %value, "rejected negative input");
        return Err(LedgerError::InvalidInput { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
