use rust_decimal::Decimal;
use serde::Serialize;

use polydemo_core::{AccountNumber, DomainError, DomainResult};

use crate::account::{Account, AccountCommand, AccountEvent, AccountKind, AccountState, impl_account_aggregate};
use crate::error::AccountError;

/// Savings account: plain withdrawal policy plus interest on the balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    state: AccountState,
    interest_rate: Decimal,
}

/// Interest computed for the current balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestStatement {
    pub account: AccountNumber,
    pub balance: Decimal,
    pub rate: Decimal,
    pub interest: Decimal,
}

impl SavingsAccount {
    /// Rate used when none is given (5%).
    pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

    pub fn open(
        number: AccountNumber,
        opening_balance: Decimal,
        interest_rate: Decimal,
    ) -> DomainResult<Self> {
        if interest_rate < Decimal::ZERO {
            return Err(DomainError::validation("interest rate cannot be negative"));
        }
        Ok(Self {
            state: AccountState::open(number, opening_balance)?,
            interest_rate,
        })
    }

    pub fn with_default_rate(number: AccountNumber, opening_balance: Decimal) -> DomainResult<Self> {
        Self::open(number, opening_balance, Self::DEFAULT_INTEREST_RATE)
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// `balance × rate`. Pure read, the balance is not credited.
    pub fn calculate_interest(&self) -> DomainResult<Decimal> {
        self.state
            .balance()
            .checked_mul(self.interest_rate)
            .ok_or_else(|| DomainError::overflow(format!("interest on {}", self.state.number())))
    }

    pub fn interest_statement(&self) -> DomainResult<InterestStatement> {
        Ok(InterestStatement {
            account: self.state.number().clone(),
            balance: self.state.balance(),
            rate: self.interest_rate,
            interest: self.calculate_interest()?,
        })
    }
}

impl_account_aggregate!(SavingsAccount);

impl Account for SavingsAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Savings
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
    use polydemo_core::AggregateRoot;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn account(balance: Decimal, rate: Decimal) -> SavingsAccount {
        SavingsAccount::open(AccountNumber::new("SA1001").unwrap(), balance, rate).unwrap()
    }

    #[test]
    fn savings_walkthrough() {
        let mut acc = account(dec!(5000), dec!(0.04));

        assert_eq!(acc.deposit(dec!(2000)).unwrap().new_balance(), dec!(7000));
        assert_eq!(acc.withdraw(dec!(1000)).unwrap().new_balance(), dec!(6000));
        assert_eq!(acc.calculate_interest().unwrap(), dec!(240));
        assert_eq!(acc.balance(), dec!(6000));
    }

    #[test]
    fn default_rate_is_five_percent() {
        let acc = SavingsAccount::with_default_rate(AccountNumber::new("SA2").unwrap(), dec!(1000))
            .unwrap();
        assert_eq!(acc.interest_rate(), dec!(0.05));
        assert_eq!(acc.calculate_interest().unwrap(), dec!(50));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let err = SavingsAccount::open(AccountNumber::new("SA3").unwrap(), dec!(1), dec!(-0.01))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("interest rate")));
    }

    #[test]
    fn overdraw_is_rejected() {
        let mut acc = account(dec!(50), dec!(0.04));
        assert!(matches!(
            acc.withdraw(dec!(51)),
            Err(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(acc.balance(), dec!(50));
        assert_eq!(acc.version(), 0);
    }

    #[test]
    fn interest_overflow_is_an_error() {
        let acc = account(Decimal::MAX, dec!(2));
        let err = acc.calculate_interest().unwrap_err();
        assert!(matches!(err, DomainError::Overflow(msg) if msg.contains("SA1001")));
        assert!(acc.interest_statement().is_err());
        assert_eq!(acc.balance(), Decimal::MAX);
    }

    #[test]
    fn statement_matches_calculation() {
        let acc = account(dec!(6000), dec!(0.04));
        let stmt = acc.interest_statement().unwrap();
        assert_eq!(stmt.account.as_str(), "SA1001");
        assert_eq!(stmt.interest, dec!(240));
        assert_eq!(stmt.balance, dec!(6000));
    }

    proptest! {
        /// Property: interest is exactly balance × rate and never mutates the account.
        #[test]
        fn interest_is_exact_and_pure(balance_cents in 0i64..100_000_000, rate_bp in 0u32..10_000) {
            let balance = Decimal::new(balance_cents, 2);
            let rate = Decimal::new(rate_bp as i64, 4);
            let acc = account(balance, rate);

            prop_assert_eq!(acc.calculate_interest().unwrap(), balance * rate);
            prop_assert_eq!(acc.calculate_interest(), acc.calculate_interest());
            prop_assert_eq!(acc.balance(), balance);
            prop_assert_eq!(acc.version(), 0);
        }
    }
}
