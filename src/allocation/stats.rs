//! Raise statistics.
//!
//! Turns final allocation records back into before/after deficit figures
//! for each employee.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, RaiseStats, SalaryBands};

use super::band_interpolation::salary_for_level;
use super::records::AllocationRecord;

/// Shortfall of `salary` against `target` as a fraction of the salary.
///
/// Returns `(salary - target) / salary` when `salary < target` and `0`
/// otherwise, so the result is never positive.
///
/// # Examples
///
/// ```
/// use raise_allocator::allocation::percent_deficit;
///
/// assert_eq!(percent_deficit(10000.0, 15000.0), -0.5);
/// assert_eq!(percent_deficit(10000.0, 100.0), 0.0);
/// assert_eq!(percent_deficit(10000.0, 10000.0), 0.0);
/// ```
pub fn percent_deficit(salary: f64, target: f64) -> f64 {
    if salary < target {
        (salary - target) / salary
    } else {
        0.0
    }
}

/// Computes the statistics for one employee from their final salary.
pub fn raise_stats(pre_raise_salary: f64, post_raise_salary: f64, target: f64) -> RaiseStats {
    let percent_diff = percent_deficit(pre_raise_salary, target);
    let post_raise_percent_diff = percent_deficit(post_raise_salary, target);
    RaiseStats {
        diff: pre_raise_salary - target,
        percent_diff,
        post_raise_salary,
        raise: post_raise_salary - pre_raise_salary,
        raise_percent: post_raise_salary / pre_raise_salary - 1.0,
        post_raise_diff: post_raise_salary - target,
        post_raise_percent_diff,
        post_raise_percent_change: post_raise_percent_diff - percent_diff,
    }
}

/// Builds the `{name -> RaiseStats}` map for a finished run.
///
/// The target salary is recomputed from the band table and must match the
/// one fixed on the record when it was built.
///
/// # Errors
///
/// - `ContractViolation` if a record has no matching employee or its target
///   drifted
/// - `MissingSalaryBand` if the band table changed under the run
pub fn finalize_raise_stats(
    records: &[AllocationRecord],
    employees: &[Employee],
    bands: &SalaryBands,
) -> EngineResult<HashMap<String, RaiseStats>> {
    let by_name: HashMap<&str, &Employee> =
        employees.iter().map(|e| (e.name.as_str(), e)).collect();

    let mut stats = HashMap::with_capacity(records.len());
    for record in records {
        let employee = by_name.get(record.employee_id()).ok_or_else(|| {
            EngineError::ContractViolation {
                message: format!(
                    "allocation record for unknown employee '{}'",
                    record.employee_id()
                ),
            }
        })?;

        let target = salary_for_level(bands, employee.level)?;
        if target != record.target_salary() {
            return Err(EngineError::ContractViolation {
                message: format!(
                    "target salary for '{}' changed from {} to {} during allocation",
                    employee.name,
                    record.target_salary(),
                    target
                ),
            });
        }

        stats.insert(
            employee.name.clone(),
            raise_stats(employee.current_salary, record.simulated_salary(), target),
        );
    }
    Ok(stats)
}
