//! Employee payroll domain module.
//!
//! Every employee variant supplies its own salary formula; there is no
//! base-case salary.

pub mod employee;
pub mod payroll;

pub use employee::{
    ContractEmployee, Employee, EmployeeKind, Manager, RegularEmployee, TEAM_ALLOWANCE_PER_HEAD,
};
pub use payroll::{Payroll, PayrollSummary, Payslip};
