//! Tab-separated readers for employees and salary bands.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, SalaryBand, SalaryBands};

/// One row of the employee file.
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    name: String,
    current_salary: f64,
    level: f64,
    #[serde(default)]
    manager: Option<String>,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            name: row.name,
            current_salary: row.current_salary,
            level: row.level,
            manager: row.manager.filter(|m| !m.is_empty()),
        }
    }
}

/// One row of the band file.
#[derive(Debug, Deserialize)]
struct BandRow {
    level: i64,
    minimum_salary: f64,
    maximum_salary: f64,
}

fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Reads employees from a tab-separated file.
///
/// The header must name `name`, `current_salary` and `level`; `manager` is
/// optional and other columns are ignored. Rows keep their file order.
///
/// # Errors
///
/// Returns `InputNotFound` if the file cannot be opened and
/// `InputParseError` for a malformed row.
pub fn read_employees<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let file = File::open(path).map_err(|_| EngineError::InputNotFound {
        path: path_str.clone(),
    })?;
    read_employees_from(file, &path_str)
}

/// Reads employees from any reader; `source` names it in errors.
///
/// # Example
///
/// ```
/// use raise_allocator::io::read_employees_from;
///
/// let data = "name\tcurrent_salary\tlevel\nbob\t150\t2\n";
/// let employees = read_employees_from(data.as_bytes(), "inline").unwrap();
/// assert_eq!(employees[0].name, "bob");
/// ```
pub fn read_employees_from<R: Read>(reader: R, source: &str) -> EngineResult<Vec<Employee>> {
    let mut employees = Vec::new();
    for row in tsv_reader(reader).deserialize::<EmployeeRow>() {
        let row = row.map_err(|e| EngineError::InputParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        employees.push(row.into());
    }
    debug!(source, employees = employees.len(), "Read employees");
    Ok(employees)
}

/// Reads a salary band table from a tab-separated file.
///
/// The header must name `level`, `minimum_salary` and `maximum_salary`. A
/// repeated level replaces the earlier row.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file cannot be opened,
/// `ConfigParseError` for a malformed row and `InvalidSalaryBand` for
/// inverted bounds.
pub fn read_salary_bands<P: AsRef<Path>>(path: P) -> EngineResult<SalaryBands> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let file = File::open(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;
    read_salary_bands_from(file, &path_str)
}

/// Reads a salary band table from any reader; `source` names it in errors.
pub fn read_salary_bands_from<R: Read>(reader: R, source: &str) -> EngineResult<SalaryBands> {
    let mut bands = SalaryBands::new();
    for row in tsv_reader(reader).deserialize::<BandRow>() {
        let row = row.map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;
        let band = SalaryBand::new(row.level, row.minimum_salary, row.maximum_salary)?;
        bands.insert(row.level, band)?;
    }
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_employees_keeps_file_order() {
        let data = "name\tcurrent_salary\tlevel\tmanager\n\
                    james\t100\t1\tann\n\
                    bob\t100.5\t2.25\t\n";

        let employees = read_employees_from(data.as_bytes(), "test").unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "james");
        assert_eq!(employees[0].manager.as_deref(), Some("ann"));
        assert_eq!(employees[1].name, "bob");
        assert_eq!(employees[1].current_salary, 100.5);
        assert_eq!(employees[1].level, 2.25);
        assert!(employees[1].manager.is_none());
    }

    #[test]
    fn test_read_employees_without_manager_column() {
        let data = "level\tname\tcurrent_salary\textra\n1.5\tjames\t100\tignored\n";

        let employees = read_employees_from(data.as_bytes(), "test").unwrap();

        assert_eq!(employees[0].name, "james");
        assert_eq!(employees[0].level, 1.5);
        assert!(employees[0].manager.is_none());
    }

    #[test]
    fn test_read_employees_bad_salary_returns_parse_error() {
        let data = "name\tcurrent_salary\tlevel\njames\tlots\t1\n";

        match read_employees_from(data.as_bytes(), "salaries.tsv") {
            Err(EngineError::InputParseError { path, .. }) => assert_eq!(path, "salaries.tsv"),
            other => panic!("Expected InputParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_read_employees_missing_file() {
        assert!(matches!(
            read_employees("/nonexistent/salaries.tsv"),
            Err(EngineError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_read_shipped_employee_file() {
        let employees = read_employees("./config/employees.tsv").unwrap();
        assert_eq!(employees.len(), 8);
        assert_eq!(employees[0].name, "alice");
        assert!(employees[0].manager.is_none());
    }

    #[test]
    fn test_read_salary_bands() {
        let data = "level\tminimum_salary\tmaximum_salary\n1\t100\t200\n2\t200\t300\n";

        let bands = read_salary_bands_from(data.as_bytes(), "bands.tsv").unwrap();

        assert_eq!(bands.len(), 2);
        assert_eq!(bands.get(1).unwrap().max, 200.0);
    }

    #[test]
    fn test_read_salary_bands_missing_column_returns_parse_error() {
        let data = "level\tminimum_salary\n1\t100\n";

        assert!(matches!(
            read_salary_bands_from(data.as_bytes(), "bands.tsv"),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_read_salary_bands_rejects_inverted_band() {
        let data = "level\tminimum_salary\tmaximum_salary\n3\t300\t200\n";

        assert!(matches!(
            read_salary_bands_from(data.as_bytes(), "bands.tsv"),
            Err(EngineError::InvalidSalaryBand { level: 3, .. })
        ));
    }
}
