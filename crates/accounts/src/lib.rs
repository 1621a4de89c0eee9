//! Bank account domain module.
//!
//! Every account variant shares deposit/withdraw/query behaviour through the
//! [`Account`] trait; variants differ in their withdrawal policy and extra
//! capabilities (interest for savings, a balance floor for current accounts).
//!
//! Pure domain logic only: no IO, no printing.

pub mod account;
pub mod basic;
pub mod current;
pub mod error;
pub mod savings;

pub use account::{
    Account, AccountCommand, AccountEvent, AccountKind, AccountState, Deposited, Operation,
    Withdrawn,
};
pub use basic::BasicAccount;
pub use current::CurrentAccount;
pub use error::AccountError;
pub use savings::{InterestStatement, SavingsAccount};
