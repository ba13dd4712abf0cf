// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Services that validate and coordinate the registrar's entities.
//!
//! Each entity kind has its own service over a typed repository. The
//! [`Registry`] owns all four and enforces the rules that span kinds.

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

mod course_service;
mod error;
mod instructor_service;
mod registry;
mod section_service;
mod snapshot;
mod student_service;

#[cfg(test)]
mod tests;

pub use course_service::CourseService;
pub use error::{ErrorKind, RegistryError};
pub use instructor_service::InstructorService;
pub use registry::Registry;
pub use section_service::SectionService;
pub use snapshot::{RegistryOverview, RegistrySnapshot};
pub use student_service::StudentService;
