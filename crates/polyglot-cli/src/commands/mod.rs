//! CLI command implementations.

mod check;
mod coverage;
mod locales;
mod localize;
mod translate;

use clap::Args;
use miette::Result;
use polyglot::Backend;
use tracing::debug;

use crate::output::load_error_report;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use locales::{run_locales, LocalesArgs};
pub use localize::{run_localize, LocalizeArgs};
pub use translate::{run_translate, TranslateArgs};

/// Load path shared by every command that builds a backend.
#[derive(Debug, Args)]
pub struct LoadPathArgs {
    /// Locale files, directories or glob patterns, in load order
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Locale at the end of every fallback chain
    #[arg(long, default_value = "en", env = "POLYGLOT_DEFAULT_LOCALE")]
    pub default_locale: String,

    /// Do not fall back to the default locale
    #[arg(long)]
    pub no_fallbacks: bool,
}

impl LoadPathArgs {
    /// Build and load a backend for these paths.
    pub fn load(&self) -> Result<Backend> {
        debug!(paths = ?self.paths, "loading locale data");
        let backend = Backend::builder()
            .load_path(self.paths.clone())
            .default_locale(self.default_locale.as_str())
            .fallbacks(!self.no_fallbacks)
            .build();
        backend.reload().map_err(load_error_report)?;
        Ok(backend)
    }
}
