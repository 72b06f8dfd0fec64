//! Localization of dates, times and numbers.

mod localize;
mod rules;

pub use localize::{LocaleFormatter, Localizable};
pub use rules::{FormatKind, FormatRules, builtin_rules, english};
