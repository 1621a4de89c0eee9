//! Payroll run over a heterogeneous roster.

use rust_decimal::Decimal;
use serde::Serialize;

use polydemo_core::{DomainError, DomainResult};

use crate::employee::{Employee, EmployeeKind};

/// One computed salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payslip {
    pub name: String,
    pub kind: EmployeeKind,
    pub salary: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollSummary {
    pub payslips: Vec<Payslip>,
    pub total: Decimal,
}

/// Stateless payroll calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Payroll;

impl Payroll {
    /// Compute one payslip per employee, in roster order.
    pub fn run(employees: &[Box<dyn Employee>]) -> DomainResult<PayrollSummary> {
        let payslips = employees
            .iter()
            .map(|e| {
                Ok(Payslip {
                    name: e.name().to_string(),
                    kind: e.kind(),
                    salary: e.calculate_salary()?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        let total = payslips
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.salary))
            .ok_or_else(|| DomainError::overflow("payroll total"))?;
        Ok(PayrollSummary { payslips, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::{ContractEmployee, Manager, RegularEmployee};
    use rust_decimal_macros::dec;

    #[test]
    fn run_keeps_order_and_totals() {
        let roster: Vec<Box<dyn Employee>> = vec![
            Box::new(RegularEmployee::new("Alice", dec!(50000), dec!(8000)).unwrap()),
            Box::new(ContractEmployee::new("Bob", dec!(400), dec!(120)).unwrap()),
            Box::new(Manager::new("Charlie", dec!(70000), dec!(15000), 10).unwrap()),
        ];

        let summary = Payroll::run(&roster).unwrap();

        let names: Vec<&str> = summary.payslips.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
        assert_eq!(summary.payslips[2].kind, EmployeeKind::Manager);
        assert_eq!(summary.total, dec!(196000));
    }

    #[test]
    fn empty_roster_totals_zero() {
        let summary = Payroll::run(&[]).unwrap();
        assert!(summary.payslips.is_empty());
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn total_overflow_is_an_error() {
        let roster: Vec<Box<dyn Employee>> = vec![
            Box::new(RegularEmployee::new("Alice", Decimal::MAX, dec!(0)).unwrap()),
            Box::new(RegularEmployee::new("Dana", Decimal::MAX, dec!(0)).unwrap()),
        ];
        assert!(matches!(
            Payroll::run(&roster),
            Err(DomainError::Overflow(msg)) if msg.contains("total")
        ));
    }
}
