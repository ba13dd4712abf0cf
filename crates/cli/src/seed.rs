// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demonstration data loaded at startup.

use registrar::{Registry, RegistryError};
use tracing::info;

/// Code of the demonstration section.
pub const DEMO_SECTION: &str = "T01";

/// Populates `registry` with a small, consistent data set.
///
/// # Errors
///
/// Returns the first registry error; on an empty registry none is expected.
pub fn seed(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register_student("Joao Silva", "joao", "123", "2024001", "Engineering")?;
    registry.register_student("Maria Santos", "maria", "456", "2024002", "Engineering")?;
    registry.register_student("Pedro Costa", "pedro", "789", "2024003", "Information Systems")?;

    registry.register_instructor("Dr. Carlos", "carlos", "pass1", "Programming", "REG001")?;
    registry.register_instructor("Dr. Ana", "ana", "pass2", "Databases", "REG002")?;

    registry.register_on_site_course("Java", "CS101", 80.0, "Room 405")?;
    registry.register_remote_course("Python", "CS102", 60.0, "Google Classroom")?;

    registry.create_section(DEMO_SECTION, "REG001", "CS101")?;
    for (enrollment_id, first, second) in [("2024001", 8.5, 9.0), ("2024002", 6.0, 5.5)] {
        registry.enroll(DEMO_SECTION, enrollment_id)?;
        registry.record_evaluation(DEMO_SECTION, enrollment_id, "Exam 1")?;
        registry.record_evaluation(DEMO_SECTION, enrollment_id, "Exam 2")?;
        registry.assign_score(DEMO_SECTION, enrollment_id, "Exam 1", first)?;
        registry.assign_score(DEMO_SECTION, enrollment_id, "Exam 2", second)?;
    }

    info!(overview = ?registry.overview(), "Loaded demonstration data");
    Ok(())
}
