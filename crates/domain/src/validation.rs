// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Lowest score an evaluation may hold.
pub const SCORE_MIN: f64 = 0.0;
/// Highest score an evaluation may hold.
pub const SCORE_MAX: f64 = 10.0;

/// Validates that a required text field is not blank.
///
/// A value made only of whitespace counts as blank. The value itself is
/// not modified.
///
/// # Arguments
///
/// * `field` - The field name reported on failure
/// * `value` - The value to check
///
/// # Errors
///
/// Returns `DomainError::BlankField` if the trimmed value is empty.
pub fn require_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::BlankField { field });
    }
    Ok(())
}

/// Validates that a course duration is strictly positive.
///
/// # Errors
///
/// Returns `DomainError::InvalidDuration` if `hours` is not finite or not
/// greater than zero.
pub fn require_positive_hours(hours: f64) -> Result<(), DomainError> {
    // NaN fails both comparisons, so check finiteness explicitly
    if !hours.is_finite() || hours <= 0.0 {
        return Err(DomainError::InvalidDuration { hours });
    }
    Ok(())
}

/// Validates that a score lies within `SCORE_MIN..=SCORE_MAX`.
///
/// # Errors
///
/// Returns `DomainError::ScoreOutOfRange` for values below the minimum,
/// above the maximum, or NaN.
pub fn validate_score(value: f64) -> Result<(), DomainError> {
    if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(DomainError::ScoreOutOfRange {
            value,
            min: SCORE_MIN,
            max: SCORE_MAX,
        });
    }
    Ok(())
}
