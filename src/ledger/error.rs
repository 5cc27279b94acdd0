use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections raised by ledger mutations. A rejected mutation never changes state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("{field} must not be negative (got {value})")]
    InvalidInput { field: &'static str, value: Decimal },
    #[error("{field} of {value} would push total spending past the largest representable amount")]
    Overflow { field: &'static str, value: Decimal },
}
