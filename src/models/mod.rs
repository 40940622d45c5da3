//! Core data models for the raise allocation engine.
//!
//! This module contains the domain models shared by the engine, the
//! tabular reader/writer and the HTTP API.

mod allocation_result;
mod employee;
mod salary_band;

pub use allocation_result::{
    AllocationResult, AuditStep, AuditTrace, AuditWarning, BudgetSummary, RaiseStats,
};
pub use employee::Employee;
pub use salary_band::{SalaryBand, SalaryBands};
