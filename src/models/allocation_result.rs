//! Allocation result models.
//!
//! This module contains the [`AllocationResult`] type and its associated
//! structures that capture all outputs from a raise allocation run: the
//! per-employee [`RaiseStats`], the budget figures and an audit trace.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Before/after deficit statistics for one employee.
///
/// Percent deficits are fractions of the salary itself (not of the target)
/// and are never positive: an employee at or above target has a deficit of
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaiseStats {
    /// Pre-raise salary minus target salary.
    pub diff: f64,
    /// Pre-raise percent deficit.
    pub percent_diff: f64,
    /// Salary after all raises were applied.
    pub post_raise_salary: f64,
    /// Dollars granted to this employee.
    pub raise: f64,
    /// Raise as a fraction of the pre-raise salary.
    pub raise_percent: f64,
    /// Post-raise salary minus target salary.
    pub post_raise_diff: f64,
    /// Post-raise percent deficit.
    pub post_raise_percent_diff: f64,
    /// Improvement in percent deficit. Never negative for a non-negative budget.
    pub post_raise_percent_change: f64,
}

/// A single step in the audit trace recording one phase of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the phase.
    pub rule_id: String,
    /// The human-readable name of the phase.
    pub rule_name: String,
    /// The input figures for this step.
    pub input: serde_json::Value,
    /// The output figures from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of what happened.
    pub reasoning: String,
}

/// A warning generated during allocation.
///
/// Warnings flag outcomes that are valid but worth a second look, such as
/// a minimum raise that could not be funded for everyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a run.
///
/// # Example
///
/// ```
/// use raise_allocator::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of phase steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// Budget figures for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// The nominal raise budget handed to the engine.
    pub raise_budget: f64,
    /// Dollars granted by the minimum-raise pass.
    pub minimum_raise_total: f64,
    /// Dollars granted by greedy distribution.
    pub distributed_total: f64,
    /// Dollars granted beyond the nominal budget. Always below one increment.
    pub overshoot: f64,
}

/// The complete result of a raise allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Unique identifier for this run.
    pub allocation_id: Uuid,
    /// When the run finished.
    pub timestamp: DateTime<Utc>,
    /// The crate version that produced this result.
    pub engine_version: String,
    /// Budget figures.
    pub budget: BudgetSummary,
    /// Per-employee statistics keyed by employee name.
    pub stats: HashMap<String, RaiseStats>,
    /// Phase-by-phase audit trace.
    pub audit_trace: AuditTrace,
}

impl AllocationResult {
    /// Total dollars granted across both passes.
    pub fn total_granted(&self) -> f64 {
        self.budget.minimum_raise_total + self.budget.distributed_total
    }
}
