//! Tab-separated raise report writer.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::allocation::salary_for_level;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, RaiseStats, SalaryBands};

/// Report columns, in output order.
pub const REPORT_COLUMNS: [&str; 13] = [
    "name",
    "manager",
    "level",
    "current_salary",
    "level_salary",
    "diff",
    "percent_diff",
    "post_raise_salary",
    "raise",
    "raise_percent",
    "post_raise_diff",
    "post_raise_percent_diff",
    "post_raise_percent_change",
];

/// One report row. Field order must match [`REPORT_COLUMNS`].
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    name: &'a str,
    manager: &'a str,
    level: f64,
    current_salary: f64,
    level_salary: f64,
    diff: f64,
    percent_diff: f64,
    post_raise_salary: f64,
    raise: f64,
    raise_percent: f64,
    post_raise_diff: f64,
    post_raise_percent_diff: f64,
    post_raise_percent_change: f64,
}

fn output_error(e: impl std::fmt::Display) -> EngineError {
    EngineError::OutputError {
        message: e.to_string(),
    }
}

/// Writes one row per employee, in `employees` order, joining each
/// employee's attributes with their raise statistics.
///
/// # Errors
///
/// Returns `ContractViolation` if an employee has no statistics,
/// `MissingSalaryBand` if their band is absent and `OutputError` if the
/// writer fails.
pub fn write_raise_report<W: Write>(
    writer: W,
    employees: &[Employee],
    bands: &SalaryBands,
    stats: &HashMap<String, RaiseStats>,
) -> EngineResult<()> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    tsv.write_record(REPORT_COLUMNS).map_err(output_error)?;

    for employee in employees {
        let employee_stats =
            stats
                .get(&employee.name)
                .ok_or_else(|| EngineError::ContractViolation {
                    message: format!("no raise statistics for employee '{}'", employee.name),
                })?;
        let level_salary = salary_for_level(bands, employee.level)?;

        tsv.serialize(ReportRow {
            name: &employee.name,
            manager: employee.manager.as_deref().unwrap_or(""),
            level: employee.level,
            current_salary: employee.current_salary,
            level_salary,
            diff: employee_stats.diff,
            percent_diff: employee_stats.percent_diff,
            post_raise_salary: employee_stats.post_raise_salary,
            raise: employee_stats.raise,
            raise_percent: employee_stats.raise_percent,
            post_raise_diff: employee_stats.post_raise_diff,
            post_raise_percent_diff: employee_stats.post_raise_percent_diff,
            post_raise_percent_change: employee_stats.post_raise_percent_change,
        })
        .map_err(output_error)?;
    }

    tsv.flush().map_err(output_error)
}
