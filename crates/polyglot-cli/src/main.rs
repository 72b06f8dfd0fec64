//! polyglot CLI entry point.
//!
//! Provides command-line tools for working with YAML/JSON locale files:
//! - `polyglot check` - Validate locale files
//! - `polyglot coverage` - Compare key coverage across locales
//! - `polyglot translate` - Look up a key
//! - `polyglot localize` - Format a date, time or number
//! - `polyglot locales` - List loaded locales

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_locales, run_localize, run_translate, CheckArgs, CoverageArgs,
    LocalesArgs, LocalizeArgs, TranslateArgs,
};
use tracing_subscriber::EnvFilter;

/// Locale file tools.
#[derive(Debug, Parser)]
#[command(name = "polyglot")]
#[command(about = "Locale file tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that locale files parse
    Check(CheckArgs),
    /// Report key coverage of locales against a source locale
    Coverage(CoverageArgs),
    /// Translate a key
    Translate(TranslateArgs),
    /// Localize a date, time or number
    Localize(LocalizeArgs),
    /// List the locales defined by the load path
    Locales(LocalesArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let fallback = if verbose { "polyglot=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Translate(args) => run_translate(args),
        Commands::Localize(args) => run_localize(args),
        Commands::Locales(args) => run_locales(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
