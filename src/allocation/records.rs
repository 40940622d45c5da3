//! Allocation records.
//!
//! One [`AllocationRecord`] per employee holds the engine's working state
//! for a run: the fixed target salary, the simulated salary that raises are
//! applied to, and the priority key derived from the two.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, SalaryBands};

use super::band_interpolation::salary_for_level;
use super::scoring::{Polarity, PriorityKey, cmp_f64};

/// Working state for one employee during a run.
///
/// Records are values: applying a raise returns a new record with its
/// priority recomputed, and the target salary never changes after
/// creation. Records are totally ordered by polarity and score, then by
/// simulated salary, target salary and employee name, so no two records of
/// one run compare equal.
#[derive(Debug, Clone)]
pub struct AllocationRecord {
    key: PriorityKey,
    simulated_salary: f64,
    target_salary: f64,
    employee_id: String,
}

impl AllocationRecord {
    /// Creates a record and scores it.
    pub fn new(
        employee_id: impl Into<String>,
        simulated_salary: f64,
        target_salary: f64,
    ) -> EngineResult<Self> {
        let key = PriorityKey::score(simulated_salary, target_salary)?;
        Ok(Self {
            key,
            simulated_salary,
            target_salary,
            employee_id: employee_id.into(),
        })
    }

    /// Returns a copy of this record with `amount` added to the simulated
    /// salary and the priority recomputed.
    pub fn with_raise(&self, amount: f64) -> EngineResult<Self> {
        let simulated_salary = self.simulated_salary + amount;
        let key = PriorityKey::score(simulated_salary, self.target_salary)?;
        Ok(Self {
            key,
            simulated_salary,
            target_salary: self.target_salary,
            employee_id: self.employee_id.clone(),
        })
    }

    /// Below or at/above target.
    pub fn polarity(&self) -> Polarity {
        self.key.polarity
    }

    /// The full priority key.
    pub fn priority_key(&self) -> &PriorityKey {
        &self.key
    }

    /// Salary including every raise applied so far.
    pub fn simulated_salary(&self) -> f64 {
        self.simulated_salary
    }

    /// The interpolated target salary fixed at creation.
    pub fn target_salary(&self) -> f64 {
        self.target_salary
    }

    /// Name of the employee this record belongs to.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

impl PartialEq for AllocationRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AllocationRecord {}

impl PartialOrd for AllocationRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AllocationRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .polarity
            .cmp(&other.key.polarity)
            .then_with(|| cmp_f64(self.key.negated_score, other.key.negated_score))
            .then_with(|| cmp_f64(self.simulated_salary, other.simulated_salary))
            .then_with(|| cmp_f64(self.target_salary, other.target_salary))
            .then_with(|| self.employee_id.cmp(&other.employee_id))
    }
}

/// Builds one record per employee, in input order.
///
/// No budget is spent here. Each record starts at the employee's current
/// salary with its target interpolated from the band table.
///
/// # Errors
///
/// - `InvalidEmployee` for a repeated name or an unusable salary or level
/// - `MissingSalaryBand` if an employee's band is absent
/// - `InvalidTargetSalary` if the interpolated target is not positive
///
/// # Examples
///
/// ```
/// use raise_allocator::allocation::{build_allocation_records, Polarity};
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
/// let records = build_allocation_records(&employees, &bands).unwrap();
/// assert_eq!(records[0].polarity(), Polarity::AtOrAbove);
/// assert_eq!(records[1].target_salary(), 200.0);
/// ```
pub fn build_allocation_records(
    employees: &[Employee],
    bands: &SalaryBands,
) -> EngineResult<Vec<AllocationRecord>> {
    let mut seen = HashSet::with_capacity(employees.len());
    let mut records = Vec::with_capacity(employees.len());

    for employee in employees {
        employee.validate()?;
        if !seen.insert(employee.name.as_str()) {
            return Err(EngineError::InvalidEmployee {
                name: employee.name.clone(),
                message: "duplicate employee name".to_string(),
            });
        }

        let target_salary = salary_for_level(bands, employee.level)?;
        if !target_salary.is_finite() || target_salary <= 0.0 {
            return Err(EngineError::InvalidTargetSalary {
                employee: employee.name.clone(),
                target: target_salary,
            });
        }

        records.push(AllocationRecord::new(
            employee.name.clone(),
            employee.current_salary,
            target_salary,
        )?);
    }

    debug!(records = records.len(), "Built allocation records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryBand;

    fn create_test_bands() -> SalaryBands {
        SalaryBands::from_bands([
            (1, SalaryBand { min: 100.0, max: 200.0 }),
            (2, SalaryBand { min: 200.0, max: 300.0 }),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_records_nominal() {
        let employees = vec![
            Employee::new("james", 100.0, 1.0),
            Employee::new("bob", 100.0, 2.0),
            Employee::new("joe", 150.0, 2.0),
        ];

        let records = build_allocation_records(&employees, &create_test_bands()).unwrap();

        let summary: Vec<(i8, f64, f64, &str)> = records
            .iter()
            .map(|r| {
                (
                    r.polarity().sign(),
                    r.simulated_salary(),
                    r.target_salary(),
                    r.employee_id(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, 100.0, 100.0, "james"),
                (-1, 100.0, 200.0, "bob"),
                (-1, 150.0, 200.0, "joe"),
            ]
        );
    }

    #[test]
    fn test_build_records_rejects_duplicate_names() {
        let employees = vec![
            Employee::new("james", 100.0, 1.0),
            Employee::new("james", 120.0, 1.0),
        ];

        match build_allocation_records(&employees, &create_test_bands()) {
            Err(EngineError::InvalidEmployee { name, message }) => {
                assert_eq!(name, "james");
                assert!(message.contains("duplicate"));
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_build_records_missing_band_aborts() {
        let employees = vec![
            Employee::new("james", 100.0, 1.0),
            Employee::new("ann", 100.0, 7.5),
        ];

        match build_allocation_records(&employees, &create_test_bands()) {
            Err(EngineError::MissingSalaryBand { level }) => assert_eq!(level, 7),
            other => panic!("Expected MissingSalaryBand, got {:?}", other),
        }
    }

    #[test]
    fn test_build_records_rejects_zero_target() {
        let bands = SalaryBands::from_bands([(0, SalaryBand { min: 0.0, max: 0.0 })]).unwrap();
        let employees = vec![Employee::new("zed", 100.0, 0.0)];

        match build_allocation_records(&employees, &bands) {
            Err(EngineError::InvalidTargetSalary { employee, target }) => {
                assert_eq!(employee, "zed");
                assert_eq!(target, 0.0);
            }
            other => panic!("Expected InvalidTargetSalary, got {:?}", other),
        }
    }

    #[test]
    fn test_with_raise_keeps_target_and_rescores() {
        let record = AllocationRecord::new("bob", 199.0, 200.0).unwrap();
        assert_eq!(record.polarity(), Polarity::Underpaid);

        let raised = record.with_raise(1.0).unwrap();
        assert_eq!(raised.simulated_salary(), 200.0);
        assert_eq!(raised.target_salary(), 200.0);
        assert_eq!(raised.polarity(), Polarity::AtOrAbove);
        assert_eq!(record.simulated_salary(), 199.0);
    }

    #[test]
    fn test_equal_scores_order_by_lower_salary() {
        let bob = AllocationRecord::new("bob", 200.0, 200.0).unwrap();
        let james = AllocationRecord::new("james", 100.0, 100.0).unwrap();

        assert_eq!(
            bob.priority_key().negated_score,
            james.priority_key().negated_score
        );
        assert!(james < bob);
    }

    #[test]
    fn test_identical_salaries_order_by_name() {
        let ann = AllocationRecord::new("ann", 150.0, 150.0).unwrap();
        let zoe = AllocationRecord::new("zoe", 150.0, 150.0).unwrap();

        assert!(ann < zoe);
        assert_ne!(ann, zoe);
    }
}
