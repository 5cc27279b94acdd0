use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::ExpenseCategory;

/// A single recorded expense. Records are never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub date: Option<NaiveDate>,
}

impl ExpenseRecord {
    pub fn new(category: ExpenseCategory, amount: Decimal, date: Option<NaiveDate>) -> Self {
        Self {
            category,
            amount,
            date,
        }
    }

    /// Date as `YYYY-MM-DD`, or `-` when the record has none.
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".into())
    }
}
