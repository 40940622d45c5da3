//! Target salary lookup.
//!
//! Maps a fractional compensation level onto the band table by linear
//! interpolation inside the band selected by the level's integer part.

use crate::error::EngineResult;
use crate::models::SalaryBands;

/// Returns the target ("level") salary for a fractional level.
///
/// With `b = floor(level)`, the result is
/// `band[b].min + (level - b) * (band[b].max - band[b].min)`. An exact
/// integer level yields the band minimum; levels approaching `b + 1` from
/// below approach the band maximum without consulting band `b + 1`.
///
/// # Errors
///
/// Returns `MissingSalaryBand` if the table has no band for `floor(level)`.
///
/// # Examples
///
/// ```
/// use raise_allocator::allocation::salary_for_level;
/// use raise_allocator::models::{SalaryBand, SalaryBands};
///
/// let bands = SalaryBands::from_bands([
///     (1, SalaryBand { min: 100.0, max: 200.0 }),
///     (2, SalaryBand { min: 200.0, max: 300.0 }),
/// ])
/// .unwrap();
///
/// assert_eq!(salary_for_level(&bands, 1.0).unwrap(), 100.0);
/// assert_eq!(salary_for_level(&bands, 1.5).unwrap(), 150.0);
/// assert!(salary_for_level(&bands, 3.0).is_err());
/// ```
pub fn salary_for_level(bands: &SalaryBands, level: f64) -> EngineResult<f64> {
    let floor = level.floor();
    let band = bands.get(floor as i64)?;
    let band_fraction = level - floor;
    Ok(band.min + band_fraction * band.spread())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::SalaryBand;
    use proptest::prelude::*;

    fn create_test_bands() -> SalaryBands {
        SalaryBands::from_bands([
            (1, SalaryBand { min: 100.0, max: 200.0 }),
            (2, SalaryBand { min: 200.0, max: 300.0 }),
        ])
        .unwrap()
    }

    #[test]
    fn test_integer_level_returns_band_minimum() {
        let bands = create_test_bands();
        assert_eq!(salary_for_level(&bands, 1.0).unwrap(), 100.0);
        assert_eq!(salary_for_level(&bands, 2.0).unwrap(), 200.0);
    }

    #[test]
    fn test_level_near_next_band_approaches_maximum() {
        let bands = create_test_bands();
        let salary = salary_for_level(&bands, 1.9999999999999).unwrap();
        assert!((salary - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_band_does_not_need_next_band() {
        let bands = create_test_bands();
        let salary = salary_for_level(&bands, 2.75).unwrap();
        assert!((salary - 275.0).abs() < 1e-9);
    }

    #[test]
    fn test_level_below_lowest_band_returns_error() {
        let bands = create_test_bands();
        match salary_for_level(&bands, 0.0) {
            Err(EngineError::MissingSalaryBand { level }) => assert_eq!(level, 0),
            other => panic!("Expected MissingSalaryBand, got {:?}", other),
        }
    }

    #[test]
    fn test_level_above_highest_band_returns_error() {
        let bands = create_test_bands();
        match salary_for_level(&bands, 3.0) {
            Err(EngineError::MissingSalaryBand { level }) => assert_eq!(level, 3),
            other => panic!("Expected MissingSalaryBand, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_interpolation_stays_inside_band(fraction in 0.0f64..0.999) {
            let bands = create_test_bands();
            let salary = salary_for_level(&bands, 1.0 + fraction).unwrap();
            prop_assert!(salary >= 100.0);
            prop_assert!(salary <= 200.0);
        }

        #[test]
        fn prop_interpolation_is_monotonic_within_band(a in 0.0f64..0.999, b in 0.0f64..0.999) {
            let bands = create_test_bands();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_salary = salary_for_level(&bands, 2.0 + low).unwrap();
            let high_salary = salary_for_level(&bands, 2.0 + high).unwrap();
            prop_assert!(low_salary <= high_salary);
        }
    }
}
