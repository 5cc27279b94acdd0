mod category;
mod expense;
mod money;

pub use category::ExpenseCategory;
pub use expense::ExpenseRecord;
pub use money::{format_amount, format_percent};

#[cfg(test)]
mod tests;
