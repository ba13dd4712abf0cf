// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_registry_with_section;
use crate::{Registry, RegistrySnapshot};
use serde_json::{Value, json};

#[test]
fn test_snapshot_is_keyed_by_unique_key() {
    let registry: Registry = create_registry_with_section();

    let snapshot: RegistrySnapshot = registry.snapshot();

    assert_eq!(snapshot.students.keys().collect::<Vec<_>>(), vec!["M1"]);
    assert_eq!(snapshot.instructors.keys().collect::<Vec<_>>(), vec!["R1"]);
    assert_eq!(snapshot.courses.keys().collect::<Vec<_>>(), vec!["C1"]);
    assert_eq!(snapshot.sections.keys().collect::<Vec<_>>(), vec!["T1"]);
}

#[test]
fn test_section_serializes_keys_not_copies() {
    let mut registry: Registry = create_registry_with_section();
    registry.record_evaluation("T1", "M1", "P1").unwrap();
    registry.assign_score("T1", "M1", "P1", 9.0).unwrap();

    let value: Value = serde_json::to_value(registry.snapshot()).unwrap();

    assert_eq!(
        value["sections"]["T1"],
        json!({
            "code": "T1",
            "instructor": "R1",
            "course": "C1",
            "roster": ["M1"],
            "evaluations": [
                { "description": "P1", "score": 9.0, "student": "M1" }
            ]
        })
    );
    assert_eq!(value["students"]["M1"]["identity"]["name"], "Ana");
    assert_eq!(value["courses"]["C1"]["modality"]["OnSite"]["room"], "Room 5");
}

#[test]
fn test_snapshot_is_detached_from_registry() {
    let mut registry: Registry = create_registry_with_section();
    let snapshot: RegistrySnapshot = registry.snapshot();

    registry.withdraw("T1", "M1").unwrap();
    registry.remove_student("M1").unwrap();

    assert!(snapshot.students.contains_key("M1"));
    assert_eq!(snapshot.sections["T1"].roster_size(), 1);
    assert_ne!(registry.snapshot(), snapshot);
}
