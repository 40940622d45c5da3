//! Employee model.
//!
//! This module defines the Employee struct for representing the people
//! whose salaries are being raised.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents an employee taking part in a raise allocation run.
///
/// Employees are read-only to the engine: all salary changes happen on the
/// engine's own allocation records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique name of the employee. Used as the identity key in results.
    pub name: String,
    /// The employee's current salary in dollars.
    pub current_salary: f64,
    /// Compensation level. The integer part selects a salary band and the
    /// fractional part interpolates within it.
    pub level: f64,
    /// The employee's manager, carried through to the report.
    #[serde(default)]
    pub manager: Option<String>,
}

impl Employee {
    /// Creates an employee without a manager.
    ///
    /// # Examples
    ///
    /// ```
    /// use raise_allocator::models::Employee;
    ///
    /// let james = Employee::new("james", 100.0, 1.0);
    /// assert!(james.manager.is_none());
    /// ```
    pub fn new(name: impl Into<String>, current_salary: f64, level: f64) -> Self {
        Self {
            name: name.into(),
            current_salary,
            level,
            manager: None,
        }
    }

    /// Checks that the salary and level can be used for allocation.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.current_salary.is_finite() || self.current_salary <= 0.0 {
            return Err(EngineError::InvalidEmployee {
                name: self.name.clone(),
                message: format!(
                    "current salary must be a positive number, got {}",
                    self.current_salary
                ),
            });
        }
        if !self.level.is_finite() {
            return Err(EngineError::InvalidEmployee {
                name: self.name.clone(),
                message: format!("level must be a finite number, got {}", self.level),
            });
        }
        Ok(())
    }
}
