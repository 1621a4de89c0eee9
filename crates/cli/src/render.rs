//! Presentation layer: turns driver reports into console output.

use std::io::Write;

use serde::Serialize;

use polydemo_accounts::{AccountError, AccountEvent, AccountKind, Operation};
use polydemo_payroll::PayrollSummary;

use crate::config::OutputFormat;
use crate::drivers::{AccountStep, AccountsReport, RentalReport};

const CURRENCY: &str = "₹";

/// Output collaborator for the drivers' reports.
pub trait Presenter {
    fn accounts(&mut self, report: &AccountsReport) -> anyhow::Result<()>;
    fn payroll(&mut self, summary: &PayrollSummary) -> anyhow::Result<()>;
    fn rental(&mut self, report: &RentalReport) -> anyhow::Result<()>;
}

/// Build the presenter for `format` over `out`.
pub fn presenter<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn Presenter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter::new(out)),
        OutputFormat::Json => Box::new(JsonPresenter::new(out)),
    }
}

/// Human-readable console lines.
pub struct TextPresenter<W> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn kind_heading(kind: AccountKind) -> &'static str {
    match kind {
        AccountKind::Basic => "BASIC ACCOUNT",
        AccountKind::Savings => "SAVINGS ACCOUNT",
        AccountKind::Current => "CURRENT ACCOUNT",
    }
}

/// Console message for an account step.
pub fn describe_step(step: &AccountStep) -> String {
    match step {
        AccountStep::Applied { event } => match event {
            AccountEvent::Deposited(e) => format!(
                "{CURRENCY}{} deposited. New Balance: {CURRENCY}{}",
                e.amount, e.new_balance
            ),
            AccountEvent::Withdrawn(e) => format!(
                "{CURRENCY}{} withdrawn. New Balance: {CURRENCY}{}",
                e.amount, e.new_balance
            ),
        },
        AccountStep::Rejected { error, .. } => describe_rejection(error),
        AccountStep::Interest { statement } => {
            format!("Interest Earned: {CURRENCY}{}", statement.interest)
        }
    }
}

pub fn describe_rejection(error: &AccountError) -> String {
    match error {
        AccountError::InvalidAmount {
            operation: Operation::Deposit,
            ..
        } => "Deposit amount must be positive!".to_string(),
        AccountError::InvalidAmount {
            operation: Operation::Withdraw,
            ..
        } => "Withdraw amount must be positive!".to_string(),
        AccountError::AmountOutOfRange { operation, amount } => {
            format!("Cannot {operation} {CURRENCY}{amount}. Amount is out of range!")
        }
        AccountError::InsufficientFunds { .. } => {
            "Insufficient balance! Withdrawal denied.".to_string()
        }
        AccountError::MinimumBalanceViolation {
            requested, minimum, ..
        } => format!(
            "Cannot withdraw {CURRENCY}{requested}. Minimum balance of {CURRENCY}{minimum} must be maintained!"
        ),
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn accounts(&mut self, report: &AccountsReport) -> anyhow::Result<()> {
        for run in &report.runs {
            writeln!(self.out, "\n--- {} ---", kind_heading(run.kind))?;
            for step in &run.steps {
                writeln!(self.out, "{}", describe_step(step))?;
            }
            writeln!(self.out, "Final Balance: {}", run.final_balance)?;
        }
        Ok(())
    }

    fn payroll(&mut self, summary: &PayrollSummary) -> anyhow::Result<()> {
        writeln!(self.out, "\n--- PAYROLL ---")?;
        for slip in &summary.payslips {
            writeln!(self.out, "{}'s Salary: {}", slip.name, slip.salary)?;
        }
        writeln!(self.out, "Total Payroll: {}", summary.total)?;
        Ok(())
    }

    fn rental(&mut self, report: &RentalReport) -> anyhow::Result<()> {
        writeln!(self.out, "\n--- VEHICLE RENTAL ---")?;
        for q in &report.quotes {
            writeln!(
                self.out,
                "{} Rental Cost for {} hours: {}",
                q.model, q.duration_hours, q.total
            )?;
        }
        Ok(())
    }
}

/// One JSON document per section.
pub struct JsonPresenter<W> {
    out: W,
}

#[derive(Serialize)]
struct SectionDoc<'a, T: Serialize> {
    section: &'static str,
    report: &'a T,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize>(&mut self, section: &'static str, report: &T) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.out, &SectionDoc { section, report })?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn accounts(&mut self, report: &AccountsReport) -> anyhow::Result<()> {
        self.emit("accounts", report)
    }

    fn payroll(&mut self, summary: &PayrollSummary) -> anyhow::Result<()> {
        self.emit("payroll", summary)
    }

    fn rental(&mut self, report: &RentalReport) -> anyhow::Result<()> {
        self.emit("rental", report)
    }
}
