//! Raise budget resolution.
//!
//! Converts an organisation-wide raise percentage into a dollar budget, or
//! back-derives the effective percentage when an absolute budget is forced.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// The budget figures for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBudget {
    /// Sum of every employee's current salary.
    pub total_salaries: f64,
    /// Dollars available for raises.
    pub raise_budget: f64,
    /// The overall raise as a percentage of total salaries.
    pub raise_percent: f64,
}

impl ResolvedBudget {
    /// Caps a minimum raise percentage so it never exceeds the overall raise.
    ///
    /// # Examples
    ///
    /// ```
    /// use raise_allocator::budget::ResolvedBudget;
    ///
    /// let budget = ResolvedBudget { total_salaries: 1000.0, raise_budget: 30.0, raise_percent: 3.0 };
    /// assert_eq!(budget.cap_minimum_raise(5.0), 3.0);
    /// assert_eq!(budget.cap_minimum_raise(1.0), 1.0);
    /// ```
    pub fn cap_minimum_raise(&self, minimum_raise_percent: f64) -> f64 {
        self.raise_percent.min(minimum_raise_percent)
    }
}

/// Sums current salaries.
pub fn total_salaries(employees: &[Employee]) -> f64 {
    employees.iter().map(|e| e.current_salary).sum()
}

/// Resolves the budget for a run.
///
/// Without `forced_budget` the budget is `total * raise_percent / 100`.
/// With one, that amount is used and the percentage is recomputed as
/// `((total + budget) / total - 1) * 100`.
///
/// # Errors
///
/// Returns `InvalidParameter` if the percentage or forced budget is negative
/// or non-finite, or if a forced budget is given for a zero payroll.
///
/// # Examples
///
/// ```
/// use raise_allocator::budget::resolve_budget;
/// use raise_allocator::models::Employee;
///
/// let employees = vec![Employee::new("a", 600.0, 1.0), Employee::new("b", 400.0, 1.0)];
///
/// let budget = resolve_budget(&employees, 3.0, None).unwrap();
/// assert_eq!(budget.raise_budget, 30.0);
///
/// let forced = resolve_budget(&employees, 3.0, Some(50.0)).unwrap();
/// assert!((forced.raise_percent - 5.0).abs() < 1e-9);
/// ```
pub fn resolve_budget(
    employees: &[Employee],
    raise_percent: f64,
    forced_budget: Option<f64>,
) -> EngineResult<ResolvedBudget> {
    if !raise_percent.is_finite() || raise_percent < 0.0 {
        return Err(EngineError::InvalidParameter {
            name: "raise_percent".to_string(),
            message: format!("must be a non-negative number, got {}", raise_percent),
        });
    }

    let total = total_salaries(employees);
    let resolved = match forced_budget {
        None => ResolvedBudget {
            total_salaries: total,
            raise_budget: total * (raise_percent / 100.0),
            raise_percent,
        },
        Some(budget) => {
            if !budget.is_finite() || budget < 0.0 {
                return Err(EngineError::InvalidParameter {
                    name: "raise_budget".to_string(),
                    message: format!("must be a non-negative number, got {}", budget),
                });
            }
            if total <= 0.0 {
                return Err(EngineError::InvalidParameter {
                    name: "raise_budget".to_string(),
                    message: "cannot derive a raise percent from a zero payroll".to_string(),
                });
            }
            ResolvedBudget {
                total_salaries: total,
                raise_budget: budget,
                raise_percent: ((total + budget) / total - 1.0) * 100.0,
            }
        }
    };

    debug!(
        total_salaries = resolved.total_salaries,
        raise_budget = resolved.raise_budget,
        raise_percent = resolved.raise_percent,
        "Resolved raise budget"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employees() -> Vec<Employee> {
        vec![
            Employee::new("james", 100.0, 1.0),
            Employee::new("bob", 100.0, 2.0),
        ]
    }

    #[test]
    fn test_total_salaries() {
        assert_eq!(total_salaries(&create_test_employees()), 200.0);
        assert_eq!(total_salaries(&[]), 0.0);
    }

    #[test]
    fn test_budget_from_percent() {
        let budget = resolve_budget(&create_test_employees(), 50.0, None).unwrap();
        assert_eq!(budget.total_salaries, 200.0);
        assert_eq!(budget.raise_budget, 100.0);
        assert_eq!(budget.raise_percent, 50.0);
    }

    #[test]
    fn test_forced_budget_back_derives_percent() {
        let budget = resolve_budget(&create_test_employees(), 3.0, Some(20.0)).unwrap();
        assert_eq!(budget.raise_budget, 20.0);
        assert!((budget.raise_percent - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_forced_budget_with_empty_payroll_is_rejected() {
        assert!(matches!(
            resolve_budget(&[], 3.0, Some(20.0)),
            Err(EngineError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_percent_budget_with_empty_payroll_is_zero() {
        let budget = resolve_budget(&[], 3.0, None).unwrap();
        assert_eq!(budget.raise_budget, 0.0);
    }

    #[test]
    fn test_negative_percent_is_rejected() {
        match resolve_budget(&create_test_employees(), -1.0, None) {
            Err(EngineError::InvalidParameter { name, .. }) => assert_eq!(name, "raise_percent"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_cap_minimum_raise_uses_forced_percent() {
        let budget = resolve_budget(&create_test_employees(), 3.0, Some(2.0)).unwrap();
        // forced budget of 2 on a payroll of 200 is a 1% raise
        assert!((budget.cap_minimum_raise(2.0) - 1.0).abs() < 1e-9);
    }
}
