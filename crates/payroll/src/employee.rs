use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use polydemo_core::{DomainError, DomainResult};

/// Flat allowance a manager earns per team member.
pub const TEAM_ALLOWANCE_PER_HEAD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeKind {
    Regular,
    Contract,
    Manager,
}

/// Salary capability every employee variant must supply.
pub trait Employee {
    fn name(&self) -> &str;

    fn kind(&self) -> EmployeeKind;

    /// Pure function of the employee's fields; recomputed on every call.
    ///
    /// Fails only when the result does not fit the decimal range.
    fn calculate_salary(&self) -> DomainResult<Decimal>;
}

fn overflow(name: &str) -> DomainError {
    DomainError::overflow(format!("salary of {name}"))
}

fn ensure_name(name: String) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("employee name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn ensure_non_negative(field: &str, value: Decimal) -> DomainResult<()> {
    if value < Decimal::ZERO {
        return Err(DomainError::validation(format!("{field} cannot be negative")));
    }
    Ok(())
}

/// Salaried employee: `base + bonus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegularEmployee {
    name: String,
    base_salary: Decimal,
    bonus: Decimal,
}

impl RegularEmployee {
    pub fn new(name: impl Into<String>, base_salary: Decimal, bonus: Decimal) -> DomainResult<Self> {
        ensure_non_negative("base salary", base_salary)?;
        ensure_non_negative("bonus", bonus)?;
        Ok(Self {
            name: ensure_name(name.into())?,
            base_salary,
            bonus,
        })
    }
}

impl Employee for RegularEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EmployeeKind {
        EmployeeKind::Regular
    }

    fn calculate_salary(&self) -> DomainResult<Decimal> {
        self.base_salary
            .checked_add(self.bonus)
            .ok_or_else(|| overflow(&self.name))
    }
}

/// Hourly contractor: `hourly_rate × hours_worked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractEmployee {
    name: String,
    hourly_rate: Decimal,
    hours_worked: Decimal,
}

impl ContractEmployee {
    pub fn new(
        name: impl Into<String>,
        hourly_rate: Decimal,
        hours_worked: Decimal,
    ) -> DomainResult<Self> {
        ensure_non_negative("hourly rate", hourly_rate)?;
        ensure_non_negative("hours worked", hours_worked)?;
        Ok(Self {
            name: ensure_name(name.into())?,
            hourly_rate,
            hours_worked,
        })
    }
}

impl Employee for ContractEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EmployeeKind {
        EmployeeKind::Contract
    }

    fn calculate_salary(&self) -> DomainResult<Decimal> {
        self.hourly_rate
            .checked_mul(self.hours_worked)
            .ok_or_else(|| overflow(&self.name))
    }
}

/// Manager: `base + incentive + team_size × TEAM_ALLOWANCE_PER_HEAD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manager {
    name: String,
    base_salary: Decimal,
    incentive: Decimal,
    team_size: u32,
}

impl Manager {
    pub fn new(
        name: impl Into<String>,
        base_salary: Decimal,
        incentive: Decimal,
        team_size: u32,
    ) -> DomainResult<Self> {
        ensure_non_negative("base salary", base_salary)?;
        ensure_non_negative("incentive", incentive)?;
        Ok(Self {
            name: ensure_name(name.into())?,
            base_salary,
            incentive,
            team_size,
        })
    }

    /// `team_size × TEAM_ALLOWANCE_PER_HEAD`; a `u32` head count always fits.
    pub fn team_allowance(&self) -> Decimal {
        Decimal::from(self.team_size) * TEAM_ALLOWANCE_PER_HEAD
    }
}

impl Employee for Manager {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> EmployeeKind {
        EmployeeKind::Manager
    }

    fn calculate_salary(&self) -> DomainResult<Decimal> {
        self.base_salary
            .checked_add(self.incentive)
            .and_then(|sum| sum.checked_add(self.team_allowance()))
            .ok_or_else(|| overflow(&self.name))
    }
}
