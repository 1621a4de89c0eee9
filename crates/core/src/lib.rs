//! `polydemo-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the account,
//! payroll and rental crates (no IO, no printing).

pub mod aggregate;
pub mod error;
pub mod id;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use id::AccountNumber;
