//! Greedy budget distribution.
//!
//! Hands out the remaining budget one fixed increment at a time, always to
//! the record at the front of the priority order. After each increment the
//! record is rescored and goes back into the queue.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::EngineResult;

use super::records::AllocationRecord;

/// The outcome of greedy distribution.
#[derive(Debug, Clone)]
pub struct DistributionOutcome {
    /// Final records, drained in priority order.
    pub records: Vec<AllocationRecord>,
    /// Number of increments granted.
    pub increments: u64,
    /// Dollars granted (`increments * raise_increment`).
    pub distributed: f64,
    /// Dollars granted beyond the budget handed in. In `[0, raise_increment)`.
    pub overshoot: f64,
}

/// Distributes `budget` in steps of `raise_increment`.
///
/// The budget is checked before each step and a full increment is always
/// granted, so the total may exceed `budget` by less than one increment: a
/// budget of 0.5 with an increment of 1.0 grants one whole dollar.
///
/// Callers must pass a finite, positive `raise_increment`.
///
/// # Examples
///
/// ```
/// use raise_allocator::allocation::{distribute_greedily, AllocationRecord};
///
/// let records = vec![
///     AllocationRecord::new("james", 100.0, 100.0).unwrap(),
///     AllocationRecord::new("bob", 150.0, 200.0).unwrap(),
/// ];
///
/// let outcome = distribute_greedily(records, 100.0, 1.0).unwrap();
/// let bob = outcome.records.iter().find(|r| r.employee_id() == "bob").unwrap();
/// assert_eq!(bob.simulated_salary(), 225.0);
/// ```
pub fn distribute_greedily(
    records: Vec<AllocationRecord>,
    budget: f64,
    raise_increment: f64,
) -> EngineResult<DistributionOutcome> {
    let mut queue: BinaryHeap<Reverse<AllocationRecord>> =
        records.into_iter().map(Reverse).collect();
    let mut increments: u64 = 0;

    // Remaining budget is derived from the step count so that repeated
    // subtraction of a fractional increment cannot drift.
    while budget - increments as f64 * raise_increment > 0.0 {
        let Some(Reverse(record)) = queue.pop() else {
            break;
        };
        queue.push(Reverse(record.with_raise(raise_increment)?));
        increments += 1;
    }

    let distributed = increments as f64 * raise_increment;
    let overshoot = (distributed - budget).max(0.0);
    debug!(increments, distributed, overshoot, "Distributed budget greedily");

    let records = std::iter::from_fn(|| queue.pop())
        .map(|Reverse(record)| record)
        .collect();

    Ok(DistributionOutcome {
        records,
        increments,
        distributed,
        overshoot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::Polarity;
    use proptest::prelude::*;

    fn salary_of(outcome: &DistributionOutcome, name: &str) -> f64 {
        outcome
            .records
            .iter()
            .find(|r| r.employee_id() == name)
            .map(|r| r.simulated_salary())
            .unwrap()
    }

    #[test]
    fn test_underpaid_is_closed_before_spreading() {
        let records = vec![
            AllocationRecord::new("james", 100.0, 100.0).unwrap(),
            AllocationRecord::new("bob", 150.0, 200.0).unwrap(),
        ];

        let outcome = distribute_greedily(records, 100.0, 1.0).unwrap();

        // 50 dollars close bob's gap, the other 50 alternate between the two.
        assert_eq!(salary_of(&outcome, "james"), 125.0);
        assert_eq!(salary_of(&outcome, "bob"), 225.0);
        assert_eq!(outcome.increments, 100);
        assert_eq!(outcome.overshoot, 0.0);
        assert!(outcome.records.iter().all(|r| r.polarity() == Polarity::AtOrAbove));
    }

    #[test]
    fn test_budget_below_gap_goes_entirely_to_underpaid() {
        let records = vec![
            AllocationRecord::new("james", 100.0, 100.0).unwrap(),
            AllocationRecord::new("bob", 100.0, 200.0).unwrap(),
        ];

        let outcome = distribute_greedily(records, 100.0, 1.0).unwrap();

        assert_eq!(salary_of(&outcome, "bob"), 200.0);
        assert_eq!(salary_of(&outcome, "james"), 100.0);
    }

    #[test]
    fn test_larger_gap_served_first_among_underpaid() {
        let records = vec![
            AllocationRecord::new("joe", 150.0, 200.0).unwrap(),
            AllocationRecord::new("bob", 100.0, 200.0).unwrap(),
        ];

        let outcome = distribute_greedily(records, 1.0, 1.0).unwrap();

        assert_eq!(salary_of(&outcome, "bob"), 101.0);
        assert_eq!(salary_of(&outcome, "joe"), 150.0);
    }

    #[test]
    fn test_fractional_budget_overshoots_by_one_increment() {
        let records = vec![AllocationRecord::new("bob", 100.0, 200.0).unwrap()];

        let outcome = distribute_greedily(records, 0.5, 1.0).unwrap();

        assert_eq!(outcome.increments, 1);
        assert_eq!(outcome.distributed, 1.0);
        assert_eq!(outcome.overshoot, 0.5);
        assert_eq!(salary_of(&outcome, "bob"), 101.0);
    }

    #[test]
    fn test_zero_budget_is_a_no_op() {
        let records = vec![AllocationRecord::new("bob", 100.0, 200.0).unwrap()];

        let outcome = distribute_greedily(records, 0.0, 1.0).unwrap();

        assert_eq!(outcome.increments, 0);
        assert_eq!(salary_of(&outcome, "bob"), 100.0);
    }

    #[test]
    fn test_no_records_terminates_immediately() {
        let outcome = distribute_greedily(Vec::new(), 100.0, 1.0).unwrap();

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.increments, 0);
        assert_eq!(outcome.distributed, 0.0);
    }

    #[test]
    fn test_fractional_increment_spends_exact_budget() {
        let records = vec![AllocationRecord::new("bob", 100.0, 200.0).unwrap()];

        let outcome = distribute_greedily(records, 1.0, 0.1).unwrap();

        assert_eq!(outcome.increments, 10);
        assert!((salary_of(&outcome, "bob") - 101.0).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_increment_does_not_drift_past_budget() {
        let records = vec![AllocationRecord::new("bob", 100.0, 200.0).unwrap()];

        let outcome = distribute_greedily(records, 0.3, 0.1).unwrap();

        assert_eq!(outcome.increments, 3);
        assert!(outcome.overshoot < 0.1);
    }

    #[test]
    fn test_records_drained_in_priority_order() {
        let records = vec![
            AllocationRecord::new("rich", 500.0, 200.0).unwrap(),
            AllocationRecord::new("poor", 100.0, 200.0).unwrap(),
        ];

        let outcome = distribute_greedily(records, 0.0, 1.0).unwrap();

        assert_eq!(outcome.records[0].employee_id(), "poor");
        assert_eq!(outcome.records[1].employee_id(), "rich");
    }

    proptest! {
        #[test]
        fn prop_overshoot_is_below_one_increment(
            budget in 0.0f64..500.0,
            increment in 0.5f64..25.0,
        ) {
            let records = vec![
                AllocationRecord::new("a", 100.0, 180.0).unwrap(),
                AllocationRecord::new("b", 220.0, 200.0).unwrap(),
            ];

            let outcome = distribute_greedily(records, budget, increment).unwrap();

            prop_assert!(outcome.distributed >= budget - 1e-9);
            prop_assert!(outcome.distributed - budget < increment + 1e-9);
        }

        #[test]
        fn prop_underpaid_never_skipped(budget in 0.0f64..300.0) {
            let records = vec![
                AllocationRecord::new("under", 100.0, 200.0).unwrap(),
                AllocationRecord::new("over", 210.0, 200.0).unwrap(),
            ];

            let outcome = distribute_greedily(records, budget, 1.0).unwrap();
            let under = salary_of(&outcome, "under");
            let over = salary_of(&outcome, "over");

            if under < 200.0 {
                prop_assert_eq!(over, 210.0);
            }
        }
    }
}
