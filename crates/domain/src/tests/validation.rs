// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, require_positive_hours, require_text, validate_score};

#[test]
fn test_require_text_accepts_non_blank() {
    assert!(require_text("name", "Ana").is_ok());
    assert!(require_text("name", "  Ana  ").is_ok());
}

#[test]
fn test_require_text_rejects_empty_and_whitespace() {
    assert_eq!(
        require_text("name", ""),
        Err(DomainError::BlankField { field: "name" })
    );
    assert_eq!(
        require_text("login", " \t "),
        Err(DomainError::BlankField { field: "login" })
    );
}

#[test]
fn test_require_positive_hours() {
    assert!(require_positive_hours(40.0).is_ok());
    assert!(require_positive_hours(0.5).is_ok());
    assert!(matches!(
        require_positive_hours(0.0),
        Err(DomainError::InvalidDuration { .. })
    ));
    assert!(matches!(
        require_positive_hours(-1.0),
        Err(DomainError::InvalidDuration { .. })
    ));
    assert!(require_positive_hours(f64::NAN).is_err());
    assert!(require_positive_hours(f64::INFINITY).is_err());
}

#[test]
fn test_validate_score_bounds_are_inclusive() {
    assert!(validate_score(0.0).is_ok());
    assert!(validate_score(10.0).is_ok());
    assert!(validate_score(7.5).is_ok());
}

#[test]
fn test_validate_score_rejects_out_of_range() {
    assert!(matches!(
        validate_score(-0.1),
        Err(DomainError::ScoreOutOfRange { .. })
    ));
    assert!(matches!(
        validate_score(10.1),
        Err(DomainError::ScoreOutOfRange { .. })
    ));
    assert!(validate_score(f64::NAN).is_err());
}
