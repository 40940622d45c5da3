//! Tabular input and output.
//!
//! Employees and salary bands are read from tab-separated files, and the
//! raise report is written back out as one tab-separated row per employee.

mod reader;
mod writer;

pub use reader::{read_employees, read_employees_from, read_salary_bands, read_salary_bands_from};
pub use writer::{REPORT_COLUMNS, write_raise_report};
