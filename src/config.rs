use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::ledger::Ledger;
use crate::models::ExpenseCategory;

/// Environment variable holding the `tracing` filter directives.
pub(crate) const LOG_ENV: &str = "FINDASH_LOG";

/// Seed values for a fresh session, taken from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SessionConfig {
    pub(crate) income: Option<Decimal>,
    pub(crate) savings_goal: Option<Decimal>,
    pub(crate) budget: Option<Decimal>,
    pub(crate) expenses: Vec<ExpenseSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpenseSeed {
    pub(crate) category: ExpenseCategory,
    pub(crate) amount: Decimal,
    pub(crate) date: Option<NaiveDate>,
}

impl SessionConfig {
    /// Parse `--income`, `--goal`, `--budget` and repeated `--expense` flags.
    pub(crate) fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut iter = args.iter();

        while let Some(flag) = iter.next() {
            let mut value = |name: &str| {
                iter.next()
                    .map(String::as_str)
                    .with_context(|| format!("Missing value for {name}"))
            };
            match flag.as_str() {
                "--income" => config.income = Some(parse_amount(value("--income")?)?),
                "--goal" => config.savings_goal = Some(parse_amount(value("--goal")?)?),
                "--budget" => config.budget = Some(parse_amount(value("--budget")?)?),
                "--expense" => config.expenses.push(parse_expense(value("--expense")?)?),
                other => bail!("Unknown option: {other}"),
            }
        }

        Ok(config)
    }

    /// Build a ledger by replaying the seed through the ledger's own validation.
    pub(crate) fn build_ledger(&self) -> Result<Ledger> {
        let mut ledger = Ledger::new();
        if let Some(income) = self.income {
            ledger.set_income(income)?;
        }
        if let Some(goal) = self.savings_goal {
            ledger.set_savings_goal(goal)?;
        }
        if let Some(budget) = self.budget {
            ledger.set_budget(budget)?;
        }
        for seed in &self.expenses {
            ledger.add_expense(seed.category, seed.amount, seed.date)?;
        }
        Ok(ledger)
    }
}

/// Parse a money amount, tolerating a leading `$` and thousands separators.
pub(crate) fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let cleaned: String = trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    Decimal::from_str(&cleaned).with_context(|| format!("Invalid amount: {input}"))
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {input} (expected YYYY-MM-DD)"))
}

pub(crate) fn parse_category(input: &str) -> Result<ExpenseCategory> {
    match ExpenseCategory::parse(input) {
        Some(category) => Ok(category),
        None => bail!(
            "Unknown category: {input}. Categories: {}",
            ExpenseCategory::names()
        ),
    }
}

/// `<Category>:<amount>[:<YYYY-MM-DD>]`
fn parse_expense(spec: &str) -> Result<ExpenseSeed> {
    let mut parts = spec.splitn(3, ':');
    let category = parse_category(parts.next().unwrap_or(""))?;
    let amount = match parts.next() {
        Some(a) => parse_amount(a)?,
        None => bail!("Expense must look like <Category>:<amount>[:<YYYY-MM-DD>], got: {spec}"),
    };
    let date = parts.next().map(parse_date).transpose()?;
    Ok(ExpenseSeed {
        category,
        amount,
        date,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
