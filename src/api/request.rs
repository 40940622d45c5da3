//! Request types for the raise allocation API.
//!
//! This module defines the JSON request structures for the `/allocate` endpoint.

use serde::{Deserialize, Serialize};

use crate::allocation::DEFAULT_RAISE_INCREMENT;
use crate::models::Employee;

/// Request body for the `/allocate` endpoint.
///
/// The budget is either `raise_percent` of total salaries or, when given,
/// the absolute `raise_budget`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Employees in priority order for the minimum raise.
    pub employees: Vec<EmployeeRequest>,
    /// Overall raise for the organisation, 0-100.
    pub raise_percent: f64,
    /// Absolute budget overriding `raise_percent`.
    #[serde(default)]
    pub raise_budget: Option<f64>,
    /// Dollars granted per greedy step.
    #[serde(default = "default_raise_increment")]
    pub raise_increment: f64,
    /// Guaranteed raise for everyone, capped at the overall raise percent.
    #[serde(default)]
    pub minimum_raise_percent: f64,
}

fn default_raise_increment() -> f64 {
    DEFAULT_RAISE_INCREMENT
}

/// Employee information in an allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique name of the employee.
    pub name: String,
    /// Current salary in dollars.
    pub current_salary: f64,
    /// Compensation level.
    pub level: f64,
    /// Optional manager name.
    #[serde(default)]
    pub manager: Option<String>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.name,
            current_salary: req.current_salary,
            level: req.level,
            manager: req.manager,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_allocation_request_with_defaults() {
        let json = r#"{
            "employees": [
                { "name": "james", "current_salary": 100, "level": 1 },
                { "name": "bob", "current_salary": 100, "level": 2, "manager": "ann" }
            ],
            "raise_percent": 50
        }"#;

        let request: AllocationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employees.len(), 2);
        assert_eq!(request.raise_percent, 50.0);
        assert!(request.raise_budget.is_none());
        assert_eq!(request.raise_increment, 1.0);
        assert_eq!(request.minimum_raise_percent, 0.0);
    }

    #[test]
    fn test_deserialize_allocation_request_with_overrides() {
        let json = r#"{
            "employees": [],
            "raise_percent": 3,
            "raise_budget": 5000,
            "raise_increment": 10,
            "minimum_raise_percent": 1.5
        }"#;

        let request: AllocationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.raise_budget, Some(5000.0));
        assert_eq!(request.raise_increment, 10.0);
        assert_eq!(request.minimum_raise_percent, 1.5);
    }

    #[test]
    fn test_employee_conversion() {
        let req = EmployeeRequest {
            name: "bob".to_string(),
            current_salary: 150.0,
            level: 2.0,
            manager: Some("ann".to_string()),
        };

        let employee: Employee = req.into();
        assert_eq!(employee.name, "bob");
        assert_eq!(employee.manager.as_deref(), Some("ann"));
    }
}
