//! Marginal impact scoring.
//!
//! Scores how much one more dollar helps an employee and turns the score
//! into a [`PriorityKey`] whose ascending order is the order in which the
//! greedy distributor hands out increments.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Whether a salary is below, or at/above, its target.
///
/// `Underpaid` orders before `AtOrAbove`, so every underpaid record is
/// served before any record at or above target, whatever the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Current salary is below target (-1).
    Underpaid,
    /// Current salary meets or exceeds target (+1).
    AtOrAbove,
}

impl Polarity {
    /// Classifies a salary against its target.
    pub fn of(current_salary: f64, target_salary: f64) -> Self {
        if current_salary >= target_salary {
            Polarity::AtOrAbove
        } else {
            Polarity::Underpaid
        }
    }

    /// Returns the signed form used in reports: -1 or +1.
    pub fn sign(self) -> i8 {
        match self {
            Polarity::Underpaid => -1,
            Polarity::AtOrAbove => 1,
        }
    }
}

/// Score for an employee at or above target.
///
/// Returns `-(current - target)`: the smallest surplus scores highest, so
/// leftover dollars go to those closest to target first.
///
/// # Errors
///
/// Returns `ContractViolation` if `current_salary < target_salary`.
pub fn score_at_or_above(current_salary: f64, target_salary: f64) -> EngineResult<f64> {
    if current_salary < target_salary {
        return Err(EngineError::ContractViolation {
            message: format!(
                "at-or-above score requested for salary {} below target {}",
                current_salary, target_salary
            ),
        });
    }
    Ok(-(current_salary - target_salary))
}

/// Score for an employee below target.
///
/// Returns `(current / target) / (current - target)`, or `-1.0` when the
/// salaries are equal.
///
/// # Errors
///
/// Returns `ContractViolation` if `current_salary > target_salary`.
pub fn score_underpaid(current_salary: f64, target_salary: f64) -> EngineResult<f64> {
    if current_salary > target_salary {
        return Err(EngineError::ContractViolation {
            message: format!(
                "underpaid score requested for salary {} above target {}",
                current_salary, target_salary
            ),
        });
    }
    let absolute_diff = current_salary - target_salary;
    if absolute_diff == 0.0 {
        return Ok(-1.0);
    }
    let percent_diff = current_salary / target_salary;
    Ok(percent_diff / absolute_diff)
}

/// Composite ordering key for one salary/target pair.
///
/// Ordered ascending by `(polarity, negated_score, absolute_diff,
/// percent_diff)`; the smallest key is served first. Callers that need a
/// strict total order append their own identifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityKey {
    /// Below or at/above target.
    pub polarity: Polarity,
    /// The marginal score, negated so higher scores sort first.
    pub negated_score: f64,
    /// `current - target`.
    pub absolute_diff: f64,
    /// `current / target`.
    pub percent_diff: f64,
}

impl PriorityKey {
    /// Scores a salary against its target.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` if either salary is non-finite or the
    /// target is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use raise_allocator::allocation::{Polarity, PriorityKey};
    ///
    /// let underpaid = PriorityKey::score(150.0, 200.0).unwrap();
    /// let overpaid = PriorityKey::score(250.0, 200.0).unwrap();
    ///
    /// assert_eq!(underpaid.polarity, Polarity::Underpaid);
    /// assert!(underpaid < overpaid);
    /// ```
    pub fn score(current_salary: f64, target_salary: f64) -> EngineResult<Self> {
        if !current_salary.is_finite() || !target_salary.is_finite() || target_salary <= 0.0 {
            return Err(EngineError::ContractViolation {
                message: format!(
                    "cannot score salary {} against target {}",
                    current_salary, target_salary
                ),
            });
        }

        let polarity = Polarity::of(current_salary, target_salary);
        let raw_score = match polarity {
            Polarity::AtOrAbove => score_at_or_above(current_salary, target_salary)?,
            Polarity::Underpaid => score_underpaid(current_salary, target_salary)?,
        };

        Ok(Self {
            polarity,
            negated_score: -raw_score,
            absolute_diff: current_salary - target_salary,
            percent_diff: current_salary / target_salary,
        })
    }
}

/// Orders finite floats; `-0.0` and `0.0` compare equal.
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(
            self.polarity
                .cmp(&other.polarity)
                .then_with(|| cmp_f64(self.negated_score, other.negated_score))
                .then_with(|| cmp_f64(self.absolute_diff, other.absolute_diff))
                .then_with(|| cmp_f64(self.percent_diff, other.percent_diff)),
        )
    }
}
