use rust_decimal::Decimal;

use polydemo_core::{AccountNumber, DomainError, DomainResult};

use crate::account::{
    Account, AccountCommand, AccountEvent, AccountKind, AccountState, Operation,
    impl_account_aggregate,
};
use crate::error::AccountError;

/// Current account: withdrawals may never take the balance below a floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAccount {
    state: AccountState,
    minimum_balance: Decimal,
}

impl CurrentAccount {
    /// Floor used when none is given.
    pub const DEFAULT_MINIMUM_BALANCE: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

    pub fn open(
        number: AccountNumber,
        opening_balance: Decimal,
        minimum_balance: Decimal,
    ) -> DomainResult<Self> {
        if minimum_balance < Decimal::ZERO {
            return Err(DomainError::validation("minimum balance cannot be negative"));
        }
        Ok(Self {
            state: AccountState::open(number, opening_balance)?,
            minimum_balance,
        })
    }

    pub fn with_default_minimum(
        number: AccountNumber,
        opening_balance: Decimal,
    ) -> DomainResult<Self> {
        Self::open(number, opening_balance, Self::DEFAULT_MINIMUM_BALANCE)
    }

    pub fn minimum_balance(&self) -> Decimal {
        self.minimum_balance
    }

    fn decide_withdrawal(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        AccountState::ensure_positive(Operation::Withdraw, amount)?;
        // The floor check subsumes the plain coverage check for a non-negative floor.
        if self.state.balance_after_withdrawal(amount)? < self.minimum_balance {
            return Err(AccountError::MinimumBalanceViolation {
                requested: amount,
                minimum: self.minimum_balance,
                balance: self.state.balance(),
            });
        }
        self.state.withdrawn(amount)
    }
}

impl_account_aggregate!(CurrentAccount);

impl Account for CurrentAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Current
    }

    fn state(&self) -> &AccountState {
        &self.state
    }

    fn decide(&self, command: &AccountCommand) -> Result<AccountEvent, AccountError> {
        match command {
            AccountCommand::Deposit { amount } => self.state.decide_deposit(*amount),
            AccountCommand::Withdraw { amount } => self.decide_withdrawal(*amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn account(balance: Decimal, floor: Decimal) -> CurrentAccount {
        CurrentAccount::open(AccountNumber::new("CA2001").unwrap(), balance, floor).unwrap()
    }

    #[test]
    fn current_walkthrough_follows_exact_arithmetic() {
        let mut acc = account(dec!(15000), dec!(2000));

        assert_eq!(acc.deposit(dec!(3000)).unwrap().new_balance(), dec!(18000));
        // 18000 - 14000 = 4000 >= 2000
        assert_eq!(acc.withdraw(dec!(14000)).unwrap().new_balance(), dec!(4000));
        // 4000 - 12000 < 2000
        let err = acc.withdraw(dec!(12000)).unwrap_err();
        assert_eq!(
            err,
            AccountError::MinimumBalanceViolation {
                requested: dec!(12000),
                minimum: dec!(2000),
                balance: dec!(4000)
            }
        );
        assert_eq!(acc.balance(), dec!(4000));
    }

    #[test]
    fn floor_blocks_withdrawal_the_balance_would_cover() {
        let mut acc = account(dec!(2500), dec!(2000));
        assert!(matches!(
            acc.withdraw(dec!(501)),
            Err(AccountError::MinimumBalanceViolation { .. })
        ));
        acc.withdraw(dec!(500)).unwrap();
        assert_eq!(acc.balance(), dec!(2000));
    }

    #[test]
    fn default_floor_is_one_thousand() {
        let acc = CurrentAccount::with_default_minimum(AccountNumber::new("CA1").unwrap(), dec!(0))
            .unwrap();
        assert_eq!(acc.minimum_balance(), dec!(1000));
    }

    #[test]
    fn non_positive_withdrawal_is_invalid() {
        let mut acc = account(dec!(5000), dec!(0));
        assert!(matches!(
            acc.withdraw(dec!(-1)),
            Err(AccountError::InvalidAmount {
                operation: Operation::Withdraw,
                ..
            })
        ));
    }

    #[test]
    fn huge_withdrawal_is_rejected_not_panicking() {
        let mut acc = account(dec!(0), dec!(0));
        assert!(matches!(
            acc.withdraw(Decimal::MAX),
            Err(AccountError::MinimumBalanceViolation { .. })
        ));
        assert_eq!(acc.balance(), dec!(0));
    }

    #[test]
    fn negative_floor_is_rejected() {
        assert!(CurrentAccount::open(AccountNumber::new("CA1").unwrap(), dec!(0), dec!(-1)).is_err());
    }

    proptest! {
        /// Property: a withdrawal breaching the floor never changes the balance,
        /// and an accepted one never leaves the balance below the floor.
        #[test]
        fn floor_is_never_breached(
            opening in 0i64..1_000_000,
            floor in 0i64..1_000_000,
            amount in 1i64..2_000_000,
        ) {
            let mut acc = account(Decimal::from(opening), Decimal::from(floor));
            match acc.withdraw(Decimal::from(amount)) {
                Ok(_) => prop_assert!(acc.balance() >= Decimal::from(floor)),
                Err(_) => {
                    prop_assert!(opening - amount < floor);
                    prop_assert_eq!(acc.balance(), Decimal::from(opening));
                }
            }
        }
    }
}
