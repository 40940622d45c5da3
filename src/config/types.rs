//! Configuration types for raise allocation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML band files.

use serde::Deserialize;

use crate::models::SalaryBands;

/// Band file structure.
///
/// ```yaml
/// bands:
///   1: { min: 100000, max: 130000 }
///   2: { min: 130000, max: 165000 }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct BandsConfig {
    /// Map of integer level to salary band.
    pub bands: SalaryBands,
}
