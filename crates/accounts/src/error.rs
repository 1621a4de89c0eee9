use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::account::Operation;

/// Rejection of an account command.
///
/// Every variant is a policy violation: the command is a no-op and the
/// account stays usable.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AccountError {
    /// Deposit or withdrawal of an amount ≤ 0.
    #[error("{operation} amount must be positive (got {amount})")]
    InvalidAmount { operation: Operation, amount: Decimal },

    /// Resulting balance does not fit the decimal range.
    #[error("{operation} of {amount} would overflow the balance")]
    AmountOutOfRange { operation: Operation, amount: Decimal },

    /// Withdrawal larger than the current balance.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Withdrawal that would take a current account below its floor.
    #[error("cannot withdraw {requested}: minimum balance of {minimum} must be maintained (balance {balance})")]
    MinimumBalanceViolation {
        requested: Decimal,
        minimum: Decimal,
        balance: Decimal,
    },
}
