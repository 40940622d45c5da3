//! Raise allocation engine.
//!
//! This module contains the allocation pipeline: target salary lookup from
//! the band table, marginal impact scoring, allocation record building, the
//! minimum raise pass, greedy budget distribution and the final raise
//! statistics. [`allocate_raises`] runs all of them in order.

mod band_interpolation;
mod engine;
mod greedy;
mod minimum_raise;
mod records;
mod scoring;
mod stats;

pub use band_interpolation::salary_for_level;
pub use engine::{
    AllocationParams, BUDGET_OVERSHOOT, DEFAULT_RAISE_INCREMENT, MAX_GREEDY_INCREMENTS,
    MINIMUM_RAISE_SHORTFALL, allocate_raises,
};
pub use greedy::{DistributionOutcome, distribute_greedily};
pub use minimum_raise::{MinimumRaiseOutcome, apply_minimum_raise};
pub use records::{AllocationRecord, build_allocation_records};
pub use scoring::{Polarity, PriorityKey, score_at_or_above, score_underpaid};
pub use stats::{finalize_raise_stats, percent_deficit, raise_stats};
