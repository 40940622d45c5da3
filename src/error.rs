//! Error types for the raise allocation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading inputs and
//! distributing a raise budget.

use thiserror::Error;

/// The main error type for the raise allocation engine.
///
/// Every fallible operation in the crate returns this error type. An
/// allocation run either produces a complete result or one of these errors;
/// there is no partial-success mode.
///
/// # Example
///
/// ```
/// use raise_allocator::error::EngineError;
///
/// let error = EngineError::MissingSalaryBand { level: 4 };
/// assert_eq!(error.to_string(), "Missing salary band for level 4");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No salary band exists for the integer part of an employee's level.
    #[error("Missing salary band for level {level}")]
    MissingSalaryBand {
        /// The integer band level that was looked up.
        level: i64,
    },

    /// A salary band has inconsistent bounds.
    #[error("Invalid salary band for level {level}: {message}")]
    InvalidSalaryBand {
        /// The band level.
        level: i64,
        /// A description of what made the band invalid.
        message: String,
    },

    /// The interpolated target salary cannot be used for scoring.
    #[error("Invalid target salary {target} for employee '{employee}'")]
    InvalidTargetSalary {
        /// The employee whose target was computed.
        employee: String,
        /// The offending target salary.
        target: f64,
    },

    /// A scorer or finalizer precondition was violated by the caller.
    #[error("Contract violation: {message}")]
    ContractViolation {
        /// A description of the violated precondition.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{name}': {message}")]
    InvalidEmployee {
        /// The name of the employee.
        name: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A run parameter was outside its accepted range.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Employee input file was not found at the specified path.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Employee input file could not be parsed.
    #[error("Failed to parse input file '{path}': {message}")]
    InputParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The raise report could not be written.
    #[error("Failed to write output: {message}")]
    OutputError {
        /// A description of the write failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
