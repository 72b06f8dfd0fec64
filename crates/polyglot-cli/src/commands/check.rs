//! Implementation of the `polyglot check` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use polyglot::store::{expand_load_path, load_file};
use serde::Serialize;

use crate::output::load_error_report;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Locale files, directories or glob patterns
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Per-file check result.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    locales: Vec<String>,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let files = expand_load_path(&args.paths).map_err(load_error_report)?;
    let mut reports = Vec::with_capacity(files.len());
    let mut first_error = None;

    for file in &files {
        let report = match load_file(file) {
            Ok(parsed) => FileReport {
                file: file.display().to_string(),
                locales: parsed.iter().map(|(tag, _)| tag.to_string()).collect(),
                error: None,
            },
            Err(e) => {
                let report = FileReport {
                    file: file.display().to_string(),
                    locales: Vec::new(),
                    error: Some(e.to_string()),
                };
                first_error.get_or_insert(e);
                report
            }
        };
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        for report in &reports {
            match &report.error {
                None => println!("{} {} ({})", "ok".green(), report.file, report.locales.join(", ")),
                Some(_) => println!("{} {}", "error".red(), report.file),
            }
        }
        if let Some(err) = first_error.take() {
            eprintln!("{:?}", load_error_report(err));
        }
    }

    if reports.iter().any(|r| r.error.is_some()) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
