// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod keyed;
mod repository;

#[cfg(test)]
mod tests;

use registrar_domain::{Course, Instructor, Section, Student};

pub use error::RepositoryError;
pub use keyed::Keyed;
pub use repository::Repository;

/// Students keyed by enrollment identifier.
pub type StudentRepository = Repository<Student>;
/// Instructors keyed by registration identifier.
pub type InstructorRepository = Repository<Instructor>;
/// Courses keyed by course code.
pub type CourseRepository = Repository<Course>;
/// Sections keyed by section code.
pub type SectionRepository = Repository<Section>;
