// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for core tests.

use crate::Registry;

/// Registers Ana (M1), Dr. X (R1) and the on-site course Algo (C1).
pub fn create_populated_registry() -> Registry {
    let mut registry: Registry = Registry::new();
    registry
        .register_student("Ana", "ana", "pw", "M1", "CS")
        .unwrap();
    registry
        .register_instructor("Dr. X", "x", "pw", "AI", "R1")
        .unwrap();
    registry
        .register_on_site_course("Algo", "C1", 40.0, "Room 5")
        .unwrap();
    registry
}

/// A populated registry with section T1 enrolling Ana.
pub fn create_registry_with_section() -> Registry {
    let mut registry: Registry = create_populated_registry();
    registry.create_section("T1", "R1", "C1").unwrap();
    registry.enroll("T1", "M1").unwrap();
    registry
}
