// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::BlankField { field: "name" };
    assert_eq!(format!("{err}"), "Invalid name: must not be blank");

    let err: DomainError = DomainError::InvalidDuration { hours: 0.0 };
    assert_eq!(
        format!("{err}"),
        "Invalid duration: 0 hours. Must be greater than 0"
    );

    let err: DomainError = DomainError::ScoreOutOfRange {
        value: 11.0,
        min: 0.0,
        max: 10.0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid score: 11. Must be between 0 and 10"
    );

    let err: DomainError = DomainError::AlreadyEnrolled {
        section: String::from("T1"),
        enrollment_id: String::from("M1"),
    };
    assert_eq!(
        format!("{err}"),
        "Student 'M1' is already enrolled in section 'T1'"
    );

    let err: DomainError = DomainError::NotEnrolled {
        section: String::from("T1"),
        enrollment_id: String::from("M9"),
    };
    assert_eq!(
        format!("{err}"),
        "Student 'M9' is not enrolled in section 'T1'"
    );

    let err: DomainError = DomainError::ModalityChanged {
        code: String::from("C1"),
        current: "On-site",
        requested: "Remote",
    };
    assert_eq!(
        format!("{err}"),
        "Course 'C1' is On-site; it cannot become Remote"
    );

    let err: DomainError = DomainError::UnknownAccessLevel(String::from("ROOT"));
    assert_eq!(format!("{err}"), "Unknown access level: ROOT");
}
