//! Miette diagnostics for locale file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use polyglot::LoadError;
use thiserror::Error;

/// A miette-compatible diagnostic for locale file parse errors.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(polyglot::syntax))]
pub struct LocaleDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LocaleDiagnostic {
    /// Point at `line`:`column` (both 1-based) of `content`.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);
        let offset = offset.min(content.len());

        let help = content
            .contains('\t')
            .then(|| "YAML indentation must use spaces, not tabs".to_string());

        LocaleDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}

/// Turn a load failure into a report, with source context for parse errors.
pub fn load_error_report(err: LoadError) -> Report {
    if let LoadError::Parse {
        path,
        line,
        column,
        message,
    } = &err
    {
        if let Ok(content) = read_to_string(path) {
            return LocaleDiagnostic::new(path, &content, *line, *column, message.clone()).into();
        }
    }
    miette!("{err}")
}
