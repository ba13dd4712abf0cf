// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for domain tests.

use crate::{Course, Directory, Instructor, Student};

pub fn create_test_student() -> Student {
    Student::new("Ana", "ana", "pw", "M1", "CS")
}

pub fn create_test_instructor() -> Instructor {
    Instructor::new("Dr. X", "x", "pw", "AI", "R1")
}

pub fn create_test_course() -> Course {
    Course::on_site("Algo", "C1", 40.0, "Room 5")
}

/// A directory backed by plain vectors.
#[derive(Default)]
pub struct TestDirectory {
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub courses: Vec<Course>,
}

impl Directory for TestDirectory {
    fn student(&self, enrollment_id: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.enrollment_id.as_str() == enrollment_id)
    }

    fn instructor(&self, registration_id: &str) -> Option<&Instructor> {
        self.instructors
            .iter()
            .find(|instructor| instructor.registration_id.as_str() == registration_id)
    }

    fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.code.as_str() == code)
    }
}
