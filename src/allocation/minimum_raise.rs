//! Minimum raise pass.
//!
//! Funds a guaranteed percentage raise for every employee, in input order,
//! before any optimized distribution. When the budget runs short the
//! employees earliest in the input receive their full floor and later ones
//! receive a partial or zero raise.

use tracing::{debug, warn};

use crate::error::EngineResult;

use super::records::AllocationRecord;

/// The outcome of the minimum raise pass.
#[derive(Debug, Clone)]
pub struct MinimumRaiseOutcome {
    /// Records in input order with minimum raises applied.
    pub records: Vec<AllocationRecord>,
    /// Dollars granted to each record, in input order.
    pub granted: Vec<f64>,
    /// Budget left for greedy distribution.
    pub remaining_budget: f64,
    /// Number of employees who received less than their full floor.
    pub shortfall_count: usize,
}

impl MinimumRaiseOutcome {
    /// Total dollars granted by the pass.
    pub fn total_granted(&self) -> f64 {
        self.granted.iter().sum()
    }
}

/// Applies `minimum_raise_percent` of each simulated salary, first come
/// first funded.
///
/// Each record receives `min(remaining, minimum_raise_percent / 100 *
/// simulated_salary)`. Iteration follows the order of `records`, which is
/// the input order produced by the record builder, not priority order.
///
/// # Examples
///
/// ```
/// use raise_allocator::allocation::{apply_minimum_raise, AllocationRecord};
///
/// let records = vec![
///     AllocationRecord::new("james", 100.0, 100.0).unwrap(),
///     AllocationRecord::new("bob", 100.0, 200.0).unwrap(),
/// ];
///
/// let outcome = apply_minimum_raise(records, 1.0, 100.0).unwrap();
/// assert_eq!(outcome.remaining_budget, 98.0);
/// assert_eq!(outcome.records[1].simulated_salary(), 101.0);
/// ```
pub fn apply_minimum_raise(
    records: Vec<AllocationRecord>,
    minimum_raise_percent: f64,
    budget: f64,
) -> EngineResult<MinimumRaiseOutcome> {
    let mut remaining_budget = budget;
    let mut granted = Vec::with_capacity(records.len());
    let mut raised = Vec::with_capacity(records.len());
    let mut shortfall_count = 0;

    for record in records {
        let floor = (minimum_raise_percent / 100.0) * record.simulated_salary();
        let delta = remaining_budget.min(floor);
        if delta < floor {
            shortfall_count += 1;
        }
        remaining_budget -= delta;
        granted.push(delta);
        raised.push(record.with_raise(delta)?);
    }

    if shortfall_count > 0 {
        warn!(
            shortfall_count,
            minimum_raise_percent, "Budget could not fund the full minimum raise for everyone"
        );
    }
    debug!(
        remaining_budget,
        employees = raised.len(),
        "Applied minimum raise"
    );

    Ok(MinimumRaiseOutcome {
        records: raised,
        granted,
        remaining_budget,
        shortfall_count,
    })
}
