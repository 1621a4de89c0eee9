use rust_decimal::Decimal;

use polydemo_core::{AccountNumber, DomainResult};

use crate::account::{Account, AccountCommand, AccountEvent, AccountKind, AccountState, impl_account_aggregate};
use crate::error::AccountError;

/// Plain account: withdrawals must be covered by the balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAccount {
    state: AccountState,
}

impl BasicAccount {
    pub fn open(number: AccountNumber, opening_balance: Decimal) -> DomainResult<Self> {
        Ok(Self {
            state: AccountState::open(number, opening_balance)?,
        })
    }
}

impl_account_aggregate!(BasicAccount);

impl Account for BasicAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Basic
    }

    fn state(&self) -> &AccountState {
        &self.state
    }

    fn decide(&self, command: &AccountCommand) -> Result<AccountEvent, AccountError> {
        match command {
            AccountCommand::Deposit { amount } => self.state.decide_deposit(*amount),
            AccountCommand::Withdraw { amount } => self.state.decide_covered_withdrawal(*amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polydemo_core::{Aggregate, AggregateRoot};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn account(balance: Decimal) -> BasicAccount {
        BasicAccount::open(AccountNumber::new("BA1").unwrap(), balance).unwrap()
    }

    #[test]
    fn deposit_then_withdraw() {
        let mut acc = account(Decimal::ZERO);
        acc.deposit(dec!(500)).unwrap();
        let event = acc.withdraw(dec!(200)).unwrap();

        assert_eq!(event.new_balance(), dec!(300));
        assert_eq!(acc.balance(), dec!(300));
        assert_eq!(acc.version(), 2);
        assert_eq!(acc.id().as_str(), "BA1");
    }

    #[test]
    fn withdrawing_the_whole_balance_is_allowed() {
        let mut acc = account(dec!(100));
        acc.withdraw(dec!(100)).unwrap();
        assert_eq!(acc.balance(), Decimal::ZERO);
    }

    #[test]
    fn deposit_overflowing_the_balance_is_rejected() {
        let mut acc = account(dec!(1));
        let err = acc.deposit(Decimal::MAX).unwrap_err();
        assert_eq!(
            err,
            AccountError::AmountOutOfRange {
                operation: crate::account::Operation::Deposit,
                amount: Decimal::MAX
            }
        );
        assert_eq!(acc.balance(), dec!(1));
        assert_eq!(acc.version(), 0);
    }

    #[test]
    fn overdraw_is_rejected() {
        let mut acc = account(dec!(100));
        let err = acc.withdraw(dec!(100.01)).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                requested: dec!(100.01),
                available: dec!(100)
            }
        );
        assert_eq!(acc.balance(), dec!(100));
        assert_eq!(acc.version(), 0);
    }

    #[test]
    fn handle_does_not_mutate() {
        let acc = account(dec!(10));
        let events = acc.handle(&AccountCommand::Deposit { amount: dec!(5) }).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(acc.balance(), dec!(10));
    }

    #[test]
    fn submit_applies_accepted_commands_only() {
        let mut acc = account(dec!(10));
        acc.submit(&AccountCommand::Withdraw { amount: dec!(4) }).unwrap();
        assert!(acc.submit(&AccountCommand::Withdraw { amount: dec!(7) }).is_err());
        assert_eq!(acc.balance(), dec!(6));
        assert_eq!(acc.version(), 1);
    }

    proptest! {
        /// Property: withdrawals larger than the balance never change it.
        #[test]
        fn overdraw_is_a_no_op(opening in 0i64..1_000_000, excess in 1i64..1_000_000) {
            let mut acc = account(Decimal::from(opening));
            let result = acc.withdraw(Decimal::from(opening + excess));
            let is_insufficient = matches!(result, Err(AccountError::InsufficientFunds { .. }));
            prop_assert!(is_insufficient);
            prop_assert_eq!(acc.balance(), Decimal::from(opening));
        }
    }
}
