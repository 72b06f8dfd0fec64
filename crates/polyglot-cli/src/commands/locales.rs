//! Implementation of the `polyglot locales` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};

use super::LoadPathArgs;
use crate::output::table::format_locales_table;

/// Arguments for the locales command.
#[derive(Debug, Args)]
pub struct LocalesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub load: LoadPathArgs,
}

/// Run the locales command.
pub fn run_locales(args: LocalesArgs) -> Result<i32> {
    let backend = args.load.load()?;
    let rows: Vec<(String, usize)> = backend
        .available_locales()
        .iter()
        .map(|tag| (tag.to_string(), backend.keys(tag.as_str()).len()))
        .collect();

    if args.json {
        let tags: Vec<&str> = rows.iter().map(|(tag, _)| tag.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&tags).into_diagnostic()?);
    } else {
        println!("{}", format_locales_table(&rows));
        println!("fingerprint {:016x}", backend.fingerprint());
    }
    Ok(exitcode::OK)
}
