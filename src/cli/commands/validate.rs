//! Configuration validation command
//!
//! Validates configuration files without starting a session and reports
//! every issue found, in human or JSON form.

use serde_json::json;
use tracing::info;

use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::loader;
use crate::error::{ConfigError, Severity, SpelltrackError, ValidationIssue};

/// Per-file validation outcome for the report.
struct FileReport {
    path: String,
    issues: Vec<ValidationIssue>,
    load_error: Option<String>,
}

impl FileReport {
    /// Whether the file passes under the given strictness.
    fn is_ok(&self, strict: bool) -> bool {
        self.load_error.is_none()
            && self.issues.iter().all(|issue| {
                issue.severity == Severity::Warning && !strict
            })
    }
}

/// Validate configuration files and print a report.
///
/// # Errors
///
/// Returns a [`ConfigError::ValidationError`] for the first failing file
/// after the full report has been printed.
pub fn run(args: &ValidateArgs) -> Result<(), SpelltrackError> {
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        info!(file = %path.display(), "validating configuration");
        let report = match loader::load_file(path) {
            Ok((_, warnings)) => FileReport {
                path: path.display().to_string(),
                issues: warnings,
                load_error: None,
            },
            Err(ConfigError::ValidationError { path, errors }) => FileReport {
                path,
                issues: errors,
                load_error: None,
            },
            Err(e) => FileReport {
                path: path.display().to_string(),
                issues: Vec::new(),
                load_error: Some(e.to_string()),
            },
        };
        reports.push(report);
    }

    match args.format {
        OutputFormat::Human => print_human(&reports, args.strict),
        OutputFormat::Json => print_json(&reports, args.strict)?,
    }

    if let Some(failed) = reports.iter().find(|r| !r.is_ok(args.strict)) {
        return Err(ConfigError::ValidationError {
            path: failed.path.clone(),
            errors: failed.issues.clone(),
        }
        .into());
    }
    Ok(())
}

fn print_human(reports: &[FileReport], strict: bool) {
    for report in reports {
        if report.is_ok(strict) {
            println!("{}: ok", report.path);
        } else {
            println!("{}: failed", report.path);
        }
        if let Some(error) = &report.load_error {
            println!("  error: {error}");
        }
        for issue in &report.issues {
            println!("  {issue}");
        }
    }
}

fn print_json(reports: &[FileReport], strict: bool) -> Result<(), SpelltrackError> {
    let files: Vec<_> = reports
        .iter()
        .map(|report| {
            json!({
                "path": report.path,
                "ok": report.is_ok(strict),
                "error": report.load_error,
                "issues": report.issues.iter().map(|issue| {
                    json!({
                        "path": issue.path,
                        "message": issue.message,
                        "severity": match issue.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                    })
                }).collect::<Vec<_>>(),
            })
        })
        .collect();

    let failed = reports.iter().filter(|r| !r.is_ok(strict)).count();
    let output = json!({
        "files": files,
        "summary": { "total": reports.len(), "failed": failed },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
