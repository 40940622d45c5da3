//! Allocation entry point.
//!
//! Runs the full pipeline for one budget: build records, apply the minimum
//! raise, distribute the rest greedily and compute per-employee statistics.

use std::time::Instant;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AllocationResult, AuditStep, AuditTrace, AuditWarning, BudgetSummary, Employee, SalaryBands,
};

use super::greedy::distribute_greedily;
use super::minimum_raise::apply_minimum_raise;
use super::records::build_allocation_records;
use super::scoring::Polarity;
use super::stats::finalize_raise_stats;

/// Default dollar quantum for greedy distribution.
pub const DEFAULT_RAISE_INCREMENT: f64 = 1.0;

/// Largest number of greedy steps a single run may take.
pub const MAX_GREEDY_INCREMENTS: f64 = 10_000_000.0;

/// Warning code raised when the minimum raise could not be funded for all.
pub const MINIMUM_RAISE_SHORTFALL: &str = "MINIMUM_RAISE_SHORTFALL";

/// Warning code raised when greedy distribution spent past the budget.
pub const BUDGET_OVERSHOOT: &str = "BUDGET_OVERSHOOT";

fn default_raise_increment() -> f64 {
    DEFAULT_RAISE_INCREMENT
}

/// Parameters of one allocation run.
///
/// The budget is already resolved to dollars; see [`crate::budget`] for the
/// conversion from a raise percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationParams {
    /// Dollars to distribute.
    pub raise_budget: f64,
    /// Dollars granted per greedy step.
    #[serde(default = "default_raise_increment")]
    pub raise_increment: f64,
    /// Guaranteed raise, as a percentage of current salary.
    #[serde(default)]
    pub minimum_raise_percent: f64,
}

impl AllocationParams {
    /// Creates parameters with the default increment and no minimum raise.
    pub fn new(raise_budget: f64) -> Self {
        Self {
            raise_budget,
            raise_increment: DEFAULT_RAISE_INCREMENT,
            minimum_raise_percent: 0.0,
        }
    }

    /// Sets the greedy increment.
    pub fn with_raise_increment(mut self, raise_increment: f64) -> Self {
        self.raise_increment = raise_increment;
        self
    }

    /// Sets the minimum raise percentage.
    pub fn with_minimum_raise_percent(mut self, minimum_raise_percent: f64) -> Self {
        self.minimum_raise_percent = minimum_raise_percent;
        self
    }

    /// Rejects parameters that would lower salaries, never terminate or take
    /// more than [`MAX_GREEDY_INCREMENTS`] steps.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.raise_budget.is_finite() || self.raise_budget < 0.0 {
            return Err(invalid_parameter(
                "raise_budget",
                format!("must be a non-negative number, got {}", self.raise_budget),
            ));
        }
        if !self.raise_increment.is_finite() || self.raise_increment <= 0.0 {
            return Err(invalid_parameter(
                "raise_increment",
                format!("must be greater than zero, got {}", self.raise_increment),
            ));
        }
        let increments = (self.raise_budget / self.raise_increment).ceil();
        if increments > MAX_GREEDY_INCREMENTS {
            return Err(invalid_parameter(
                "raise_increment",
                format!(
                    "budget {} in steps of {} needs {} increments, more than the limit of {}",
                    self.raise_budget, self.raise_increment, increments, MAX_GREEDY_INCREMENTS
                ),
            ));
        }
        if !self.minimum_raise_percent.is_finite() || self.minimum_raise_percent < 0.0 {
            return Err(invalid_parameter(
                "minimum_raise_percent",
                format!(
                    "must be a non-negative number, got {}",
                    self.minimum_raise_percent
                ),
            ));
        }
        Ok(())
    }
}

fn invalid_parameter(name: &str, message: String) -> EngineError {
    EngineError::InvalidParameter {
        name: name.to_string(),
        message,
    }
}

/// Distributes a raise budget across `employees`.
///
/// Employees are processed in slice order, which decides who is funded
/// first when the minimum raise cannot be covered for everyone. The run is
/// all-or-nothing: any error aborts it without partial results.
///
/// # Errors
///
/// - `InvalidParameter` for a negative budget or minimum, or a
///   non-positive increment
/// - `InvalidEmployee`, `MissingSalaryBand`, `InvalidTargetSalary` from
///   record building
///
/// # Examples
///
/// ```
/// use raise_allocator::allocation::{allocate_raises, AllocationParams};
/// use raise_allocator::models::{Employee, SalaryBand, SalaryBands};
///
/// let bands = SalaryBands::from_bands([
///     (1, SalaryBand { min: 100.0, max: 200.0 }),
///     (2, SalaryBand { min: 200.0, max: 300.0 }),
/// ])
/// .unwrap();
/// let employees = vec![
///     Employee::new("james", 100.0, 1.0),
///     Employee::new("bob", 100.0, 2.0),
/// ];
///
/// let result = allocate_raises(&employees, &bands, &AllocationParams::new(100.0)).unwrap();
/// assert_eq!(result.stats["bob"].post_raise_salary, 200.0);
/// assert_eq!(result.stats["james"].raise, 0.0);
/// ```
pub fn allocate_raises(
    employees: &[Employee],
    bands: &SalaryBands,
    params: &AllocationParams,
) -> EngineResult<AllocationResult> {
    let start_time = Instant::now();
    params.validate()?;

    info!(
        employees = employees.len(),
        raise_budget = params.raise_budget,
        raise_increment = params.raise_increment,
        minimum_raise_percent = params.minimum_raise_percent,
        "Starting raise allocation"
    );

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let records = build_allocation_records(employees, bands)?;
    let underpaid = records
        .iter()
        .filter(|r| r.polarity() == Polarity::Underpaid)
        .count();
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "build_records".to_string(),
        rule_name: "Build Allocation Records".to_string(),
        input: serde_json::json!({
            "employees": employees.len(),
            "bands": bands.len()
        }),
        output: serde_json::json!({
            "records": records.len(),
            "underpaid": underpaid
        }),
        reasoning: format!(
            "{} of {} employees are below their level salary",
            underpaid,
            records.len()
        ),
    });

    let minimum = apply_minimum_raise(
        records,
        params.minimum_raise_percent,
        params.raise_budget,
    )?;
    let minimum_raise_total = minimum.total_granted();
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "minimum_raise".to_string(),
        rule_name: "Minimum Raise".to_string(),
        input: serde_json::json!({
            "minimum_raise_percent": params.minimum_raise_percent,
            "budget": params.raise_budget
        }),
        output: serde_json::json!({
            "granted": minimum_raise_total,
            "remaining_budget": minimum.remaining_budget,
            "shortfall_count": minimum.shortfall_count
        }),
        reasoning: format!(
            "Granted ${} as a {}% minimum raise in input order",
            minimum_raise_total, params.minimum_raise_percent
        ),
    });
    if minimum.shortfall_count > 0 {
        warnings.push(AuditWarning {
            code: MINIMUM_RAISE_SHORTFALL.to_string(),
            message: format!(
                "{} employees received less than the {}% minimum raise",
                minimum.shortfall_count, params.minimum_raise_percent
            ),
            severity: "medium".to_string(),
        });
    }

    if tracing::enabled!(Level::DEBUG) {
        let mut ordered: Vec<_> = minimum.records.iter().collect();
        ordered.sort();
        for record in ordered {
            debug!(
                employee = record.employee_id(),
                polarity = record.polarity().sign(),
                negated_score = record.priority_key().negated_score,
                simulated_salary = record.simulated_salary(),
                target_salary = record.target_salary(),
                "Record after minimum raise"
            );
        }
    }

    let remaining_budget = minimum.remaining_budget;
    let distribution =
        distribute_greedily(minimum.records, remaining_budget, params.raise_increment)?;
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "greedy_distribution".to_string(),
        rule_name: "Greedy Distribution".to_string(),
        input: serde_json::json!({
            "budget": remaining_budget,
            "raise_increment": params.raise_increment
        }),
        output: serde_json::json!({
            "increments": distribution.increments,
            "distributed": distribution.distributed,
            "overshoot": distribution.overshoot
        }),
        reasoning: format!(
            "{} increments of ${} granted to the highest priority record each time",
            distribution.increments, params.raise_increment
        ),
    });
    if distribution.overshoot > 0.0 {
        warnings.push(AuditWarning {
            code: BUDGET_OVERSHOOT.to_string(),
            message: format!(
                "Distribution exceeded the budget by ${}",
                distribution.overshoot
            ),
            severity: "low".to_string(),
        });
    }

    let stats = finalize_raise_stats(&distribution.records, employees, bands)?;
    steps.push(AuditStep {
        step_number: 4,
        rule_id: "raise_stats".to_string(),
        rule_name: "Raise Statistics".to_string(),
        input: serde_json::json!({ "records": distribution.records.len() }),
        output: serde_json::json!({ "employees": stats.len() }),
        reasoning: "Computed before and after deficits against level salary".to_string(),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;
    info!(
        minimum_raise_total,
        distributed_total = distribution.distributed,
        overshoot = distribution.overshoot,
        duration_us,
        "Raise allocation completed"
    );

    Ok(AllocationResult {
        allocation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        budget: BudgetSummary {
            raise_budget: params.raise_budget,
            minimum_raise_total,
            distributed_total: distribution.distributed,
            overshoot: distribution.overshoot,
        },
        stats,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
