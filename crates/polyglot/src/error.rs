//! Error types for loading locale data and resolving translations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::InvalidLocale;

/// Errors that occur while loading locale files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a locale file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Syntax or structure error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A load path entry is not a valid glob pattern.
    #[error("invalid load path pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// A top-level key of a locale file is not a locale tag.
    #[error("{path}: {source}")]
    InvalidLocale {
        path: PathBuf,
        #[source]
        source: InvalidLocale,
    },
}

/// A key path that could not be resolved after exhausting defaults.
///
/// This is the only lookup failure: unknown keys, paths running past a leaf,
/// plural nodes without a matching variant and unknown date formats all
/// surface as this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("translation missing: {locale}.{path}{}", format_suggestions(.suggestions))]
pub struct MissingTranslationData {
    /// Locale the lookup was made for.
    pub locale: String,
    /// Key as the caller passed it.
    pub key: String,
    /// Scope as the caller passed it.
    pub scope: Option<String>,
    /// Normalized dotted path (scope and key segments).
    pub path: String,
    /// Similar keys next to the point where resolution stopped.
    pub suggestions: Vec<String>,
}

impl MissingTranslationData {
    /// Create an error without suggestions.
    pub fn new(locale: &str, key: &str, scope: Option<&str>, path: impl Into<String>) -> Self {
        Self {
            locale: locale.to_string(),
            key: key.to_string(),
            scope: scope.map(ToString::to_string),
            path: path.into(),
            suggestions: Vec::new(),
        }
    }

    /// Attach "did you mean" suggestions.
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Rank `candidates` by edit distance to `target`.
///
/// Keeps at most three candidates whose Levenshtein distance is within a
/// third of the target's length (at least one edit).
pub fn compute_suggestions(target: &str, candidates: &[String]) -> Vec<String> {
    let budget = target.chars().count().max(3);
    let mut ranked: Vec<(usize, &String)> = candidates
        .iter()
        .map(|candidate| (strsim::levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance > 0 && distance * 3 <= budget)
        .collect();
    ranked.sort();
    ranked
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
