//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary band
//! tables from YAML or tab-separated files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::io::read_salary_bands;
use crate::models::SalaryBands;

use super::types::BandsConfig;

/// Loads and provides access to the salary band table.
///
/// # Supported Formats
///
/// - `.yaml` / `.yml`: a `bands` map of integer level to `{ min, max }`
/// - anything else: tab-separated with a `level`, `minimum_salary`,
///   `maximum_salary` header
///
/// # Example
///
/// ```no_run
/// use raise_allocator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/bands.tsv").unwrap();
/// let target = loader.salary_for_level(2.5).unwrap();
/// println!("Level 2.5 target: ${}", target);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    bands: SalaryBands,
}

impl ConfigLoader {
    /// Loads a band table from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file cannot be parsed (`ConfigParseError`)
    /// - A band has inverted bounds (`InvalidSalaryBand`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let bands = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::load_yaml::<BandsConfig>(path)?.bands,
            _ => read_salary_bands(path)?,
        };
        bands.validate()?;
        if bands.is_empty() {
            warn!(path = %path.display(), "Salary band table is empty");
        }

        info!(path = %path.display(), bands = bands.len(), "Loaded salary bands");
        Ok(Self { bands })
    }

    /// Wraps an already built band table.
    pub fn from_bands(bands: SalaryBands) -> Self {
        Self { bands }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the band table.
    pub fn bands(&self) -> &SalaryBands {
        &self.bands
    }

    /// Gets the interpolated target salary for a fractional level.
    pub fn salary_for_level(&self, level: f64) -> EngineResult<f64> {
        crate::allocation::salary_for_level(&self.bands, level)
    }
}
