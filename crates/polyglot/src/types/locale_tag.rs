use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::Locale;
use thiserror::Error;

/// A locale string that is not a valid BCP-47 tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid locale tag '{tag}'")]
pub struct InvalidLocale {
    pub tag: String,
}

/// A validated locale identifier such as `en` or `de-CH`.
///
/// Tags are canonicalized through ICU4X, so `de_ch` and `de-CH` compare equal.
///
/// # Example
///
/// ```
/// use polyglot::LocaleTag;
///
/// let tag: LocaleTag = "de_ch".parse().unwrap();
/// assert_eq!(tag.as_str(), "de-CH");
/// assert_eq!(tag.language(), "de");
/// assert!(tag.is_dialect());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag {
    tag: String,
    language: String,
}

impl LocaleTag {
    /// Parse and canonicalize a locale tag.
    pub fn parse(tag: &str) -> Result<Self, InvalidLocale> {
        let normalized = tag.trim().replace('_', "-");
        let locale = Locale::from_str(&normalized).map_err(|_| InvalidLocale {
            tag: tag.to_string(),
        })?;
        Ok(Self {
            tag: locale.to_string(),
            language: locale.id.language.as_str().to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The base language subtag (`de` for `de-CH`).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether this tag carries more than a language subtag.
    pub fn is_dialect(&self) -> bool {
        self.tag != self.language
    }

    /// The base language as its own tag.
    pub fn base(&self) -> LocaleTag {
        LocaleTag {
            tag: self.language.clone(),
            language: self.language.clone(),
        }
    }

    /// Ordered lookup chain: this tag, its base language, then `default`.
    ///
    /// Duplicates are removed, so `en` with default `en` yields `[en]`.
    pub fn fallback_chain(&self, default: Option<&LocaleTag>) -> Vec<LocaleTag> {
        let mut chain = vec![self.clone()];
        if self.is_dialect() {
            chain.push(self.base());
        }
        if let Some(default) = default {
            if !chain.contains(default) {
                chain.push(default.clone());
            }
        }
        chain
    }
}

impl FromStr for LocaleTag {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for LocaleTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.tag)
    }
}
