//! Coverage command implementation.

use std::collections::BTreeSet;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use super::LoadPathArgs;
use crate::output::table::{format_coverage_table, LocaleCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source locale whose keys are expected everywhere.
    #[arg(long, default_value = "en")]
    pub source: String,

    /// Locales to check (comma-separated). Defaults to every loaded locale.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any locale is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub load: LoadPathArgs,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let backend = args.load.load()?;
    let source_keys: BTreeSet<String> = backend.keys(&args.source).into_iter().collect();
    let source_count = source_keys.len();
    if source_count == 0 {
        return Err(miette!("source locale '{}' defines no keys", args.source));
    }

    let locales: Vec<String> = if args.lang.is_empty() {
        backend
            .available_locales()
            .iter()
            .map(ToString::to_string)
            .filter(|tag| *tag != args.source)
            .collect()
    } else {
        args.lang.clone()
    };

    let coverage_data: Vec<LocaleCoverage> = locales
        .into_iter()
        .map(|locale| {
            let missing = backend.missing_keys(&args.source, &locale);
            LocaleCoverage {
                translated: source_count - missing.len(),
                locale,
                missing,
            }
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for locale_coverage in &coverage_data {
            if !locale_coverage.missing.is_empty() {
                println!("\nMissing in {}:", locale_coverage.locale);
                for key in &locale_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
