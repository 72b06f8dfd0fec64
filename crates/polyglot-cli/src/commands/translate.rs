//! Implementation of the `polyglot translate` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use polyglot::{DefaultValue, TranslateOptions, Value, Vars};
use serde::Serialize;

use super::LoadPathArgs;

/// Arguments for the translate command.
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Key to translate
    #[arg(long, short = 'k')]
    pub key: String,

    /// Locale to translate into
    #[arg(long, short = 'l', default_value = "en")]
    pub locale: String,

    /// Scope prepended to the key
    #[arg(long)]
    pub scope: Option<String>,

    /// Separator between key segments
    #[arg(long, default_value = ".")]
    pub separator: String,

    /// Count for plural selection
    #[arg(long)]
    pub count: Option<i64>,

    /// Literal text returned when the key is missing
    #[arg(long)]
    pub default: Option<String>,

    /// Variables in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub load: LoadPathArgs,
}

/// JSON output for translation errors.
#[derive(Serialize)]
struct TranslateError {
    error: String,
    suggestions: Vec<String>,
}

/// Parse a name=value variable.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> Result<i32> {
    let backend = args.load.load()?;

    // Integers stay numbers, anything else is text.
    let vars: Vars = args
        .params
        .into_iter()
        .map(|(name, value)| {
            let value = match value.parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(value),
            };
            (name, value)
        })
        .collect();

    let options = TranslateOptions::builder()
        .maybe_scope(args.scope)
        .separator(args.separator)
        .maybe_count(args.count)
        .maybe_default(args.default.map(DefaultValue::literal))
        .vars(vars)
        .build();

    match backend.translate(&args.locale, &args.key, &options) {
        Ok(translation) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&translation).into_diagnostic()?);
            } else {
                println!("{}", translation);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = TranslateError {
                    error: e.to_string(),
                    suggestions: e.suggestions.clone(),
                };
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("{}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
