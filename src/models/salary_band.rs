//! Salary band models.
//!
//! A band table maps each integer compensation level to the salary range
//! paid at that level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A salary range assigned to one integer level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    /// Salary at the bottom of the band.
    pub min: f64,
    /// Salary at the top of the band.
    pub max: f64,
}

impl SalaryBand {
    /// Creates a band, rejecting inverted or non-finite bounds.
    pub fn new(level: i64, min: f64, max: f64) -> EngineResult<Self> {
        let band = Self { min, max };
        band.validate(level)?;
        Ok(band)
    }

    /// Returns the width of the band.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }

    fn validate(&self, level: i64) -> EngineResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(EngineError::InvalidSalaryBand {
                level,
                message: "bounds must be finite numbers".to_string(),
            });
        }
        if self.max < self.min {
            return Err(EngineError::InvalidSalaryBand {
                level,
                message: format!(
                    "maximum {} is below minimum {}",
                    self.max, self.min
                ),
            });
        }
        Ok(())
    }
}

/// The band table keyed by integer level.
///
/// # Example
///
/// ```
/// use raise_allocator::models::{SalaryBand, SalaryBands};
///
/// let mut bands = SalaryBands::new();
/// bands.insert(1, SalaryBand::new(1, 100.0, 200.0).unwrap()).unwrap();
/// assert_eq!(bands.get(1).unwrap().max, 200.0);
/// assert!(bands.get(2).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalaryBands {
    bands: BTreeMap<i64, SalaryBand>,
}

impl SalaryBands {
    /// Creates an empty band table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(level, band)` pairs, validating each band.
    pub fn from_bands<I>(bands: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (i64, SalaryBand)>,
    {
        let mut table = Self::new();
        for (level, band) in bands {
            table.insert(level, band)?;
        }
        Ok(table)
    }

    /// Adds or replaces the band for a level.
    pub fn insert(&mut self, level: i64, band: SalaryBand) -> EngineResult<()> {
        band.validate(level)?;
        self.bands.insert(level, band);
        Ok(())
    }

    /// Looks up the band for an integer level.
    pub fn get(&self, level: i64) -> EngineResult<&SalaryBand> {
        self.bands
            .get(&level)
            .ok_or(EngineError::MissingSalaryBand { level })
    }

    /// Validates every band in the table.
    ///
    /// Tables built through [`SalaryBands::insert`] are always valid; this
    /// is for tables that arrived through deserialization.
    pub fn validate(&self) -> EngineResult<()> {
        for (level, band) in &self.bands {
            band.validate(*level)?;
        }
        Ok(())
    }

    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Returns true if the table has no bands.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}
