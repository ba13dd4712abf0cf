// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_populated_registry, create_registry_with_section};
use crate::{ErrorKind, Registry, RegistryError, RegistryOverview};
use registrar_domain::{Course, DomainError, EvaluationStatus, Profile, Report};

#[test]
fn test_end_to_end_single_graded_evaluation() {
    let mut registry: Registry = create_registry_with_section();

    registry.record_evaluation("T1", "M1", "P1").unwrap();
    let status: EvaluationStatus = registry.assign_score("T1", "M1", "P1", 9.0).unwrap();

    let average: f64 = registry.average_for("T1", "M1").unwrap();
    assert!((average - 9.0).abs() < f64::EPSILON);
    assert_eq!(status, EvaluationStatus::Passed);
    assert_eq!(status.as_str(), "Passed");
}

#[test]
fn test_enroll_unregistered_student_is_not_found() {
    let mut registry: Registry = create_registry_with_section();

    let result: Result<(), RegistryError> = registry.enroll("T1", "M9");

    assert_eq!(
        result,
        Err(RegistryError::NotFound {
            kind: "Student",
            key: "M9".to_owned()
        })
    );
}

#[test]
fn test_enroll_into_missing_section_is_not_found() {
    let mut registry: Registry = create_populated_registry();

    let result: Result<(), RegistryError> = registry.enroll("T9", "M1");

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_create_section_with_missing_course_is_referential() {
    let mut registry: Registry = create_populated_registry();

    let result: Result<(), RegistryError> = registry.create_section("T1", "R1", "C9");

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Referential);
    assert_eq!(registry.sections().count(), 0);
}

#[test]
fn test_update_section_points_at_new_course() {
    let mut registry: Registry = create_registry_with_section();
    registry
        .register_remote_course("Python", "C2", 60.0, "Zoom")
        .unwrap();

    registry.update_section("T1", "R1", "C2").unwrap();

    assert_eq!(
        registry.sections().find("T1").unwrap().course_code().as_str(),
        "C2"
    );
    // C1 is no longer taught and can go
    let removed: Course = registry.remove_course("C1").unwrap();
    assert_eq!(removed.name, "Algo");
}

#[test]
fn test_referenced_entities_cannot_be_removed() {
    let mut registry: Registry = create_registry_with_section();

    let student: Result<_, RegistryError> = registry.remove_student("M1");
    let instructor: Result<_, RegistryError> = registry.remove_instructor("R1");
    let course: Result<_, RegistryError> = registry.remove_course("C1");

    assert_eq!(student.unwrap_err().kind(), ErrorKind::Referential);
    assert_eq!(instructor.unwrap_err().kind(), ErrorKind::Referential);
    assert_eq!(
        course,
        Err(RegistryError::Referential {
            message: "Course 'C1' is taught in section 'T1'".to_owned()
        })
    );
    assert_eq!(
        registry.overview(),
        RegistryOverview {
            students: 1,
            instructors: 1,
            courses: 1,
            sections: 1,
        }
    );
}

#[test]
fn test_withdrawn_student_can_be_removed() {
    let mut registry: Registry = create_registry_with_section();

    registry.withdraw("T1", "M1").unwrap();
    registry.remove_student("M1").unwrap();

    assert_eq!(registry.students().count(), 0);
}

#[test]
fn test_removing_section_releases_references() {
    let mut registry: Registry = create_registry_with_section();

    registry.remove_section("T1").unwrap();

    assert!(registry.remove_instructor("R1").is_ok());
    assert!(registry.remove_course("C1").is_ok());
    assert!(registry.remove_student("M1").is_ok());
}

#[test]
fn test_remove_never_added_course_is_not_found() {
    let mut registry: Registry = create_populated_registry();

    let result: Result<Course, RegistryError> = registry.remove_course("C9");

    assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(registry.courses().count(), 1);
}

#[test]
fn test_authenticate_returns_profile_of_matching_person() {
    let registry: Registry = create_populated_registry();

    assert_eq!(registry.authenticate("ana", "pw"), Ok(Profile::Student));
    assert_eq!(registry.authenticate("x", "pw"), Ok(Profile::Instructor));
}

#[test]
fn test_authenticate_rejects_wrong_or_empty_credentials() {
    let registry: Registry = create_populated_registry();

    let wrong: Result<Profile, RegistryError> = registry.authenticate("ana", "nope");
    let empty: Result<Profile, RegistryError> = registry.authenticate("", "");

    assert_eq!(
        wrong,
        Err(RegistryError::NotFound {
            kind: "Account",
            key: "ana".to_owned()
        })
    );
    assert_eq!(empty.unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn test_section_summary_resolves_names() {
    let registry: Registry = create_registry_with_section();

    let summary: Report = registry.section_summary("T1").unwrap();

    assert_eq!(summary.value("Instructor"), Some("Dr. X (Specialty: AI)"));
    assert_eq!(
        summary.value("Course"),
        Some("Algo (Code: C1, Duration: 40.0h)")
    );
    assert_eq!(summary.value("1"), Some("Ana (M1)"));
    assert_eq!(
        registry.section_summary("T9").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_full_report_skips_empty_kinds() {
    let mut registry: Registry = Registry::new();
    registry
        .register_student("Ana", "ana", "pw", "M1", "CS")
        .unwrap();

    let report: Report = registry.full_report();

    assert_eq!(report.value("Students"), Some("1"));
    assert_eq!(report.value("Sections"), Some("0"));
    assert_eq!(report.children.len(), 1);
    assert_eq!(report.children[0].title, "All Students");
}

#[test]
fn test_full_report_includes_every_kind() {
    let registry: Registry = create_registry_with_section();

    let report: Report = registry.full_report();
    let titles: Vec<&str> = report
        .children
        .iter()
        .map(|child| child.title.as_str())
        .collect();

    assert_eq!(
        titles,
        vec!["All Students", "All Instructors", "All Courses", "All Sections"]
    );
    assert!(report.to_string().starts_with("== Full Registry Report ==\n"));
}

#[test]
fn test_overview_report_lists_totals() {
    let registry: Registry = create_registry_with_section();

    let report: Report = registry.overview().report();

    assert_eq!(
        report.to_string(),
        "== System Overview ==\nTotals\n  Students: 1\n  Instructors: 1\n  Courses: 1\n  Sections: 1\n"
    );
}

#[test]
fn test_refused_removals_keep_section_references_resolvable() {
    let mut registry: Registry = create_registry_with_section();

    assert!(registry.remove_student("M1").is_err());
    assert!(registry.remove_instructor("R1").is_err());
    assert!(registry.remove_course("C1").is_err());

    // Services are read-only through the registry, so nothing else can remove them
    assert!(registry.students().find("M1").is_some());
    assert!(registry.instructors().find("R1").is_some());
    assert!(registry.courses().find("C1").is_some());
    let summary: Report = registry.section_summary("T1").unwrap();
    assert_eq!(
        summary.value("Course"),
        Some("Algo (Code: C1, Duration: 40.0h)")
    );
    assert_eq!(summary.value("1"), Some("Ana (M1)"));
    assert!(!summary.to_string().contains("(unlisted)"));
}

#[test]
fn test_updates_flow_through_registry() {
    let mut registry: Registry = create_registry_with_section();

    registry
        .update_student("M1", "Ana Maria", "ana", "pw", "CS")
        .unwrap();
    registry
        .update_instructor("R1", "Dr. X", "x", "pw", "Databases")
        .unwrap();
    registry
        .update_course("C1", &Course::on_site("Algorithms", "C1", 60.0, "Room 5"))
        .unwrap();

    let summary: Report = registry.section_summary("T1").unwrap();
    assert_eq!(summary.value("Instructor"), Some("Dr. X (Specialty: Databases)"));
    assert_eq!(
        summary.value("Course"),
        Some("Algorithms (Code: C1, Duration: 60.0h)")
    );
    assert_eq!(summary.value("1"), Some("Ana Maria (M1)"));
}

#[test]
fn test_update_course_keeps_modality() {
    let mut registry: Registry = create_populated_registry();

    let result: Result<(), RegistryError> =
        registry.update_course("C1", &Course::remote("Algo", "C1", 40.0, "Zoom"));

    assert!(matches!(
        result,
        Err(RegistryError::Validation(DomainError::ModalityChanged { .. }))
    ));
    assert!(registry.courses().find("C1").unwrap().is_on_site());
}
