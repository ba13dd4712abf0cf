// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
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

mod seed;

use clap::{Parser, ValueEnum};
use registrar::Registry;
use registrar_domain::Report;
use tracing::{info, warn};

/// Output encoding.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Indented plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Which part of the registry to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ReportKind {
    /// Totals followed by every non-empty kind.
    Full,
    /// Totals only.
    Overview,
    /// Every student.
    Students,
    /// Every instructor.
    Instructors,
    /// Every course.
    Courses,
    /// Every section summary.
    Sections,
    /// Every repository keyed by unique key (always JSON).
    Snapshot,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start with an empty registry instead of the demonstration data.
    #[arg(long)]
    skip_seed: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report to print.
    #[arg(short, long, value_enum, default_value_t = ReportKind::Full)]
    report: ReportKind,

    /// Login to check against the registered people.
    #[arg(long, requires = "password")]
    login: Option<String>,

    /// Password to check together with `--login`.
    #[arg(long, requires = "login")]
    password: Option<String>,
}

/// Renders the requested report in the requested format.
fn render(registry: &Registry, kind: ReportKind, format: Format) -> serde_json::Result<String> {
    let report: Report = match kind {
        ReportKind::Snapshot => return serde_json::to_string_pretty(&registry.snapshot()),
        ReportKind::Overview if format == Format::Json => {
            return serde_json::to_string_pretty(&registry.overview());
        }
        ReportKind::Overview => registry.overview().report(),
        ReportKind::Full => registry.full_report(),
        ReportKind::Students => registry.students().report_all(),
        ReportKind::Instructors => registry.instructors().report_all(),
        ReportKind::Courses => registry.courses().report_all(),
        ReportKind::Sections => registry.sections().report_all(registry),
    };

    match format {
        Format::Text => Ok(report.to_string()),
        Format::Json => serde_json::to_string_pretty(&report),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing registrar");

    let mut registry: Registry = Registry::new();
    if args.skip_seed {
        info!("Starting with an empty registry");
    } else {
        seed::seed(&mut registry)?;
    }

    if let (Some(login), Some(password)) = (&args.login, &args.password) {
        match registry.authenticate(login, password) {
            Ok(profile) => println!("Authenticated '{login}' as {profile}"),
            Err(err) => {
                warn!(%err, "Login failed");
                println!("Login failed for '{login}'");
            }
        }
    }

    println!("{}", render(&registry, args.report, args.format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use registrar::RegistryOverview;
    use registrar_domain::Profile;

    fn create_seeded_registry() -> Registry {
        let mut registry: Registry = Registry::new();
        seed::seed(&mut registry).expect("Failed to seed registry");
        registry
    }

    #[test]
    fn test_seed_loads_every_kind() {
        let registry: Registry = create_seeded_registry();

        assert_eq!(
            registry.overview(),
            RegistryOverview {
                students: 3,
                instructors: 2,
                courses: 2,
                sections: 1,
            }
        );
        let average: f64 = registry.average_for(seed::DEMO_SECTION, "2024001").unwrap();
        assert!((average - 8.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seed_twice_reports_duplicate() {
        let mut registry: Registry = create_seeded_registry();

        assert!(seed::seed(&mut registry).is_err());
        assert_eq!(registry.students().count(), 3);
    }

    #[test]
    fn test_seeded_credentials_authenticate() {
        let registry: Registry = create_seeded_registry();

        assert_eq!(registry.authenticate("maria", "456"), Ok(Profile::Student));
        assert_eq!(
            registry.authenticate("carlos", "pass1"),
            Ok(Profile::Instructor)
        );
        assert!(registry.authenticate("carlos", "wrong").is_err());
    }

    #[test]
    fn test_render_overview_as_json() {
        let registry: Registry = create_seeded_registry();

        let text: String = render(&registry, ReportKind::Overview, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["students"], 3);
        assert_eq!(value["sections"], 1);
    }

    #[test]
    fn test_render_sections_as_text() {
        let registry: Registry = create_seeded_registry();

        let text: String = render(&registry, ReportKind::Sections, Format::Text).unwrap();

        assert!(text.starts_with("== All Sections ==\n"));
        assert!(text.contains("Instructor: Dr. Carlos (Specialty: Programming)"));
        assert!(text.contains("1: Joao Silva (2024001)"));
    }

    #[test]
    fn test_render_snapshot_ignores_text_format() {
        let registry: Registry = create_seeded_registry();

        let text: String = render(&registry, ReportKind::Snapshot, Format::Text).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["sections"]["T01"]["roster"][1], "2024002");
    }

    #[test]
    fn test_args_parse_flags() {
        let args: Args = Args::try_parse_from([
            "registrar-cli",
            "--skip-seed",
            "--format",
            "json",
            "--report",
            "courses",
        ])
        .unwrap();

        assert!(args.skip_seed);
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.report, ReportKind::Courses);
        assert!(args.login.is_none());
    }

    #[test]
    fn test_login_requires_password() {
        let result = Args::try_parse_from(["registrar-cli", "--login", "joao"]);

        assert!(result.is_err());
    }
}
