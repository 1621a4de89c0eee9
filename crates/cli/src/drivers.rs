//! Scenario drivers.
//!
//! Each driver constructs its entities, exercises them through their trait
//! and returns a report. Nothing here prints.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use polydemo_accounts::{
    Account, AccountError, AccountEvent, AccountKind, CurrentAccount, InterestStatement, Operation,
    SavingsAccount,
};
use polydemo_core::{AccountNumber, DomainResult};
use polydemo_payroll::{ContractEmployee, Employee, Manager, Payroll, PayrollSummary, RegularEmployee};
use polydemo_rental::{Bike, Car, LuxuryTier, RentalQuote, Truck, Vehicle};

/// Outcome of one step against an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum AccountStep {
    Applied {
        event: AccountEvent,
    },
    /// The error carries the rejected amount.
    Rejected {
        operation: Operation,
        error: AccountError,
    },
    Interest {
        statement: InterestStatement,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRun {
    pub account: AccountNumber,
    pub kind: AccountKind,
    pub steps: Vec<AccountStep>,
    pub final_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountsReport {
    pub runs: Vec<AccountRun>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalReport {
    pub duration_hours: u32,
    pub quotes: Vec<RentalQuote>,
}

fn money(value: i64) -> Decimal {
    Decimal::from(value)
}

/// Submit one operation and record its outcome; rejections are not fatal.
fn step<A: Account + ?Sized>(account: &mut A, operation: Operation, amount: Decimal) -> AccountStep {
    let result = match operation {
        Operation::Deposit => account.deposit(amount),
        Operation::Withdraw => account.withdraw(amount),
    };
    match result {
        Ok(event) => {
            debug!(
                account = %account.number(),
                %operation,
                %amount,
                balance = %event.new_balance(),
                "operation applied"
            );
            AccountStep::Applied { event }
        }
        Err(error) => {
            warn!(account = %account.number(), %operation, %amount, %error, "operation rejected");
            AccountStep::Rejected { operation, error }
        }
    }
}

fn finish<A: Account + ?Sized>(account: &A, steps: Vec<AccountStep>) -> AccountRun {
    AccountRun {
        account: account.number().clone(),
        kind: account.kind(),
        steps,
        final_balance: account.balance(),
    }
}

/// Savings and current account walkthroughs.
pub fn run_accounts() -> DomainResult<AccountsReport> {
    info!("running savings account scenario");
    let mut savings = SavingsAccount::open(
        AccountNumber::new("SA1001")?,
        money(5000),
        Decimal::new(4, 2),
    )?;
    let mut steps = vec![
        step(&mut savings, Operation::Deposit, money(2000)),
        step(&mut savings, Operation::Withdraw, money(1000)),
    ];
    let statement = savings.interest_statement()?;
    debug!(account = %statement.account, interest = %statement.interest, "interest calculated");
    steps.push(AccountStep::Interest { statement });
    let savings_run = finish(&savings, steps);

    info!("running current account scenario");
    let mut current = CurrentAccount::open(AccountNumber::new("CA2001")?, money(15000), money(2000))?;
    let steps = vec![
        step(&mut current, Operation::Deposit, money(3000)),
        step(&mut current, Operation::Withdraw, money(14000)),
        step(&mut current, Operation::Withdraw, money(12000)),
    ];
    let current_run = finish(&current, steps);

    Ok(AccountsReport {
        runs: vec![savings_run, current_run],
    })
}

/// Payroll over one employee of each kind.
pub fn run_payroll() -> DomainResult<PayrollSummary> {
    info!("running payroll scenario");
    let roster: Vec<Box<dyn Employee>> = vec![
        Box::new(RegularEmployee::new("Alice", money(50000), money(8000))?),
        Box::new(ContractEmployee::new("Bob", money(400), money(120))?),
        Box::new(Manager::new("Charlie", money(70000), money(15000), 10)?),
    ];
    let summary = Payroll::run(&roster)?;
    debug!(employees = summary.payslips.len(), total = %summary.total, "payroll computed");
    Ok(summary)
}

/// Rental quotes for one vehicle of each kind.
pub fn run_rental(duration_hours: u32) -> DomainResult<RentalReport> {
    info!(duration_hours, "running rental scenario");
    let fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car::new("Toyota Innova", money(1500), LuxuryTier::Premium)?),
        Box::new(Bike::with_helmet("Royal Enfield", money(300))?),
        Box::new(Truck::new("Tata Heavy Duty", money(2500), money(5))?),
    ];
    let quotes = fleet
        .iter()
        .map(|v| v.quote(duration_hours))
        .collect::<DomainResult<Vec<RentalQuote>>>()?;
    for q in &quotes {
        debug!(model = %q.model, total = %q.total, "rental priced");
    }
    Ok(RentalReport {
        duration_hours,
        quotes,
    })
}
