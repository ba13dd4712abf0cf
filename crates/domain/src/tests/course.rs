// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_course;
use crate::{Course, DomainError, Modality, Report, Reportable};

#[test]
fn test_on_site_detail_includes_room() {
    let course: Course = create_test_course();
    let detail: Report = course.detail();

    assert_eq!(detail.value("Name"), Some("Algo"));
    assert_eq!(detail.value("Code"), Some("C1"));
    assert_eq!(detail.value("Duration"), Some("40.0 hours"));
    assert_eq!(detail.value("Modality"), Some("On-site"));
    assert_eq!(detail.value("Room"), Some("Room 5"));
    assert_eq!(detail.value("Platform"), None);
}

#[test]
fn test_remote_report_includes_platform() {
    let course: Course = Course::remote("Python", "CS102", 60.0, "Classroom");
    let report: Report = course.report();

    assert_eq!(report.title, "Remote Course Report");
    assert_eq!(report.value("Platform"), Some("Classroom"));
    assert_eq!(report.value("Room"), None);
    assert!(!course.is_on_site());
}

#[test]
fn test_validate_rejects_non_positive_duration() {
    let course: Course = Course::on_site("Algo", "C1", 0.0, "Room 5");
    assert!(matches!(
        course.validate(),
        Err(DomainError::InvalidDuration { .. })
    ));
}

#[test]
fn test_validate_rejects_blank_modality_field() {
    let course: Course = Course::remote("Python", "CS102", 60.0, " ");
    assert_eq!(
        course.validate(),
        Err(DomainError::BlankField { field: "platform" })
    );

    let course: Course = Course::on_site("Java", "CS101", 80.0, "");
    assert_eq!(
        course.validate(),
        Err(DomainError::BlankField { field: "room" })
    );
}

#[test]
fn test_modality_labels() {
    let on_site: Modality = Modality::OnSite {
        room: String::from("405"),
    };
    assert_eq!(on_site.label(), "On-site");
    assert!(create_test_course().is_on_site());
}

#[test]
fn test_modality_variant_is_compared_not_its_detail() {
    let course: Course = create_test_course();
    let moved: Course = Course::on_site("Algo", "C1", 40.0, "Room 9");
    let remote: Course = Course::remote("Algo", "C1", 40.0, "Zoom");

    assert!(course.same_modality(&moved));
    assert_eq!(course.check_same_modality(&moved), Ok(()));
    assert_eq!(
        course.check_same_modality(&remote),
        Err(DomainError::ModalityChanged {
            code: String::from("C1"),
            current: "On-site",
            requested: "Remote",
        })
    );
}
