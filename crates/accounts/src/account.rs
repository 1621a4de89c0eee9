use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use polydemo_core::{Aggregate, AccountNumber, DomainError, DomainResult};
use polydemo_events::Event;

use crate::error::AccountError;

/// Balance-changing operation, used to label rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deposit,
    Withdraw,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Operation::Deposit => "deposit",
            Operation::Withdraw => "withdraw",
        })
    }
}

/// Concrete account variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Basic,
    Savings,
    Current,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountCommand {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
}

/// Event: Deposited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub account: AccountNumber,
    pub amount: Decimal,
    pub new_balance: Decimal,
}

/// Event: Withdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub account: AccountNumber,
    pub amount: Decimal,
    pub new_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountEvent {
    Deposited(Deposited),
    Withdrawn(Withdrawn),
}

impl AccountEvent {
    pub fn amount(&self) -> Decimal {
        match self {
            AccountEvent::Deposited(e) => e.amount,
            AccountEvent::Withdrawn(e) => e.amount,
        }
    }

    /// Balance after the event was applied.
    pub fn new_balance(&self) -> Decimal {
        match self {
            AccountEvent::Deposited(e) => e.new_balance,
            AccountEvent::Withdrawn(e) => e.new_balance,
        }
    }
}

impl Event for AccountEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::Deposited(_) => "accounts.account.deposited",
            AccountEvent::Withdrawn(_) => "accounts.account.withdrawn",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

/// State shared by every account variant: identity, balance, version.
///
/// Variants embed this and only decide *whether* a command is allowed; the
/// resulting events and their application live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    number: AccountNumber,
    balance: Decimal,
    version: u64,
}

impl AccountState {
    /// Open with a non-negative starting balance.
    pub fn open(number: AccountNumber, opening_balance: Decimal) -> DomainResult<Self> {
        if opening_balance < Decimal::ZERO {
            return Err(DomainError::validation("opening balance cannot be negative"));
        }
        Ok(Self {
            number,
            balance: opening_balance,
            version: 0,
        })
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn ensure_positive(operation: Operation, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount { operation, amount });
        }
        Ok(())
    }

    pub fn decide_deposit(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        Self::ensure_positive(Operation::Deposit, amount)?;
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::AmountOutOfRange {
                operation: Operation::Deposit,
                amount,
            })?;
        Ok(AccountEvent::Deposited(Deposited {
            account: self.number.clone(),
            amount,
            new_balance,
        }))
    }

    /// Plain withdrawal policy: the balance must cover the amount.
    pub fn decide_covered_withdrawal(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        Self::ensure_positive(Operation::Withdraw, amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.withdrawn(amount)
    }

    /// Balance left after withdrawing `amount`, if representable.
    pub fn balance_after_withdrawal(&self, amount: Decimal) -> Result<Decimal, AccountError> {
        self.balance
            .checked_sub(amount)
            .ok_or(AccountError::AmountOutOfRange {
                operation: Operation::Withdraw,
                amount,
            })
    }

    /// Build a `Withdrawn` event without any policy check.
    pub fn withdrawn(&self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        Ok(AccountEvent::Withdrawn(Withdrawn {
            account: self.number.clone(),
            amount,
            new_balance: self.balance_after_withdrawal(amount)?,
        }))
    }

    pub fn apply(&mut self, event: &AccountEvent) {
        self.balance = event.new_balance();
        self.version += 1;
    }
}

/// Polymorphic account capability.
///
/// Each variant supplies [`Account::decide`]; deposit, withdraw and balance
/// queries are shared. A rejected command returns the reason and leaves the
/// balance untouched.
pub trait Account:
    Aggregate<Id = AccountNumber, Command = AccountCommand, Event = AccountEvent, Error = AccountError>
{
    fn kind(&self) -> AccountKind;

    fn state(&self) -> &AccountState;

    /// Variant-specific decision for a single command.
    fn decide(&self, command: &AccountCommand) -> Result<AccountEvent, AccountError>;

    fn number(&self) -> &AccountNumber {
        self.state().number()
    }

    /// Current balance. No side effects.
    fn balance(&self) -> Decimal {
        self.state().balance()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        self.submit(&AccountCommand::Deposit { amount })
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<AccountEvent, AccountError> {
        self.submit(&AccountCommand::Withdraw { amount })
    }

    /// Decide, then apply the resulting event.
    fn submit(&mut self, command: &AccountCommand) -> Result<AccountEvent, AccountError> {
        let event = self.decide(command)?;
        self.apply(&event);
        Ok(event)
    }
}

/// Wire `AggregateRoot` + `Aggregate` for a variant embedding `state: AccountState`.
macro_rules! impl_account_aggregate {
    ($t:ty) => {
        impl polydemo_core::AggregateRoot for $t {
            type Id = polydemo_core::AccountNumber;

            fn id(&self) -> &Self::Id {
                self.state.number()
            }

            fn version(&self) -> u64 {
                self.state.version()
            }
        }

        impl polydemo_core::Aggregate for $t {
            type Command = $crate::account::AccountCommand;
            type Event = $crate::account::AccountEvent;
            type Error = $crate::error::AccountError;

            fn apply(&mut self, event: &Self::Event) {
                self.state.apply(event);
            }

            fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
                $crate::account::Account::decide(self, command).map(|event| vec![event])
            }
        }
    };
}

pub(crate) use impl_account_aggregate;
