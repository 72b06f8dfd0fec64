//! Localized date, time and number formatting.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};

use super::rules::{FormatKind, FormatRules, builtin_rules, english};
use crate::parser::{DateFormat, Directive, FormatItem, parse_date_format};
use crate::store::LocaleStore;
use crate::types::{Entry, LocaleTag};

/// A value that can be localized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Localizable {
    Date(NaiveDate),
    Time(DateTime<FixedOffset>),
    Integer(i64),
    Float(f64),
}

impl Localizable {
    /// The family of named formats this value uses, if any.
    pub fn format_kind(&self) -> Option<FormatKind> {
        match self {
            Localizable::Date(_) => Some(FormatKind::Date),
            Localizable::Time(_) => Some(FormatKind::Time),
            Localizable::Integer(_) | Localizable::Float(_) => None,
        }
    }
}

impl From<NaiveDate> for Localizable {
    fn from(date: NaiveDate) -> Self {
        Localizable::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for Localizable {
    fn from(time: DateTime<FixedOffset>) -> Self {
        Localizable::Time(time)
    }
}

impl From<DateTime<Utc>> for Localizable {
    fn from(time: DateTime<Utc>) -> Self {
        Localizable::Time(time.fixed_offset())
    }
}

impl From<i64> for Localizable {
    fn from(n: i64) -> Self {
        Localizable::Integer(n)
    }
}

impl From<i32> for Localizable {
    fn from(n: i32) -> Self {
        Localizable::Integer(i64::from(n))
    }
}

impl From<f64> for Localizable {
    fn from(n: f64) -> Self {
        Localizable::Float(n)
    }
}

/// Formats values for a locale fallback chain.
///
/// Every piece of data (named formats, month and day names, number symbols)
/// is taken from the first locale in the chain whose files define it, then
/// from the first locale with built-in rules, then from English.
pub struct LocaleFormatter<'a> {
    store: &'a LocaleStore,
    chain: &'a [LocaleTag],
}

impl<'a> LocaleFormatter<'a> {
    pub fn new(store: &'a LocaleStore, chain: &'a [LocaleTag]) -> Self {
        Self { store, chain }
    }

    /// Localize `object` with the named format.
    ///
    /// Returns `None` when a date or time format name is unknown in every
    /// locale of the chain. Numbers ignore the format name.
    pub fn localize(&self, object: &Localizable, format: &str) -> Option<String> {
        match object {
            Localizable::Date(date) => {
                let pattern = self.named_format(FormatKind::Date, format)?;
                let at = date.and_time(Default::default()).and_utc().fixed_offset();
                Some(self.format_time(&parse_date_format(&pattern), &at))
            }
            Localizable::Time(time) => {
                let pattern = self.named_format(FormatKind::Time, format)?;
                Some(self.format_time(&parse_date_format(&pattern), time))
            }
            Localizable::Integer(n) => Some(self.format_number(*n < 0, &n.unsigned_abs().to_string())),
            Localizable::Float(n) => {
                if !n.is_finite() {
                    return Some(n.to_string());
                }
                let negative = n.is_sign_negative() && *n != 0.0;
                Some(self.format_number(negative, &n.abs().to_string()))
            }
        }
    }

    /// Render a parsed format for a point in time.
    pub fn format_time(&self, format: &DateFormat, at: &DateTime<FixedOffset>) -> String {
        let mut output = String::new();
        for item in &format.items {
            match item {
                FormatItem::Literal(text) => output.push_str(text),
                FormatItem::Directive { directive, padded } => {
                    output.push_str(&self.directive(*directive, *padded, at));
                }
            }
        }
        output
    }

    fn directive(&self, directive: Directive, padded: bool, at: &DateTime<FixedOffset>) -> String {
        let number = |value: u32, width: usize| {
            if padded {
                format!("{value:0width$}")
            } else {
                value.to_string()
            }
        };
        let weekday = at.weekday().num_days_from_sunday() as usize;
        let month = at.month0() as usize;
        match directive {
            Directive::Year => at.year().to_string(),
            Directive::ShortYear => format!("{:02}", at.year().rem_euclid(100)),
            Directive::Month => number(at.month(), 2),
            Directive::Day => number(at.day(), 2),
            Directive::DaySpace if padded => format!("{:>2}", at.day()),
            Directive::DaySpace => at.day().to_string(),
            Directive::DayOfYear => number(at.ordinal(), 3),
            Directive::Hour24 => number(at.hour(), 2),
            Directive::Hour12 => number(at.hour12().1, 2),
            Directive::Minute => number(at.minute(), 2),
            Directive::Second => number(at.second(), 2),
            Directive::Meridian => {
                if at.hour12().0 {
                    self.text(&["time", "pm"], |rules| rules.pm)
                } else {
                    self.text(&["time", "am"], |rules| rules.am)
                }
            }
            Directive::Offset => at.format("%z").to_string(),
            Directive::AbbrDayName => self.name("abbr_day_names", weekday, |r| &r.abbr_day_names),
            Directive::DayName => self.name("day_names", weekday, |r| &r.day_names),
            Directive::AbbrMonthName => {
                self.name("abbr_month_names", month, |r| &r.abbr_month_names)
            }
            Directive::MonthName => self.name("month_names", month, |r| &r.month_names),
            Directive::OrdinalDay => (self.rules().ordinal)(at.day()),
        }
    }

    /// Group the integer digits and attach sign and fraction.
    fn format_number(&self, negative: bool, digits: &str) -> String {
        let delimiter = self.text(&["number", "format", "delimiter"], |rules| rules.delimiter);
        let separator = self.text(&["number", "format", "separator"], |rules| rules.separator);
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };

        let mut output = String::new();
        if negative {
            output.push_str(self.rules().minus);
        }
        output.push_str(&group_digits(integer, &delimiter));
        if let Some(fraction) = fraction {
            output.push_str(&separator);
            output.push_str(fraction);
        }
        output
    }

    /// A named format from locale data, then from built-in rules.
    ///
    /// The whole chain is searched for locale data before any built-in
    /// rules apply, so `de.yml` overrides the built-in `de` rules for `de-CH`.
    fn named_format(&self, kind: FormatKind, name: &str) -> Option<String> {
        let path = [kind.key(), "formats", name];
        let from_store = self
            .chain
            .iter()
            .find_map(|tag| self.store_entry(tag, &path).and_then(Entry::as_text));
        if let Some(pattern) = from_store {
            return Some(pattern.to_string());
        }
        self.chain
            .iter()
            .find_map(|tag| builtin_rules(tag.language()).and_then(|rules| rules.format(kind, name)))
            .map(ToString::to_string)
    }

    /// The `index`th entry of a `date.<key>` name list.
    fn name(
        &self,
        key: &str,
        index: usize,
        builtin: impl Fn(&FormatRules) -> &[&'static str],
    ) -> String {
        for tag in self.chain {
            if let Some(Entry::List(items)) = self.store_entry(tag, &["date", key]) {
                if let Some(name) = items.get(index).and_then(Entry::as_text) {
                    return name.to_string();
                }
            }
        }
        builtin(self.rules())
            .get(index)
            .map(|name| (*name).to_string())
            .unwrap_or_default()
    }

    /// A text setting from locale data or built-in rules.
    fn text(&self, path: &[&str], builtin: impl Fn(&FormatRules) -> &'static str) -> String {
        for tag in self.chain {
            if let Some(text) = self.store_entry(tag, path).and_then(Entry::as_text) {
                return text.to_string();
            }
        }
        builtin(self.rules()).to_string()
    }

    /// Built-in rules of the first chain locale that has them.
    fn rules(&self) -> &'static FormatRules {
        self.chain
            .iter()
            .find_map(|tag| builtin_rules(tag.language()))
            .unwrap_or_else(english)
    }

    fn store_entry(&self, tag: &LocaleTag, path: &[&str]) -> Option<&'a Entry> {
        let (first, rest) = path.split_first()?;
        let mut current = self.store.root(tag)?.get(*first)?;
        for segment in rest {
            current = current.as_tree()?.get(*segment)?;
        }
        Some(current)
    }
}

/// Insert `delimiter` between groups of three digits, counted from the right.
fn group_digits(digits: &str, delimiter: &str) -> String {
    let len = digits.chars().count();
    let mut output = String::with_capacity(digits.len() + len);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            output.push_str(delimiter);
        }
        output.push(c);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_from_the_right() {
        assert_eq!(group_digits("5000", ","), "5,000");
        assert_eq!(group_digits("1234567", "."), "1.234.567");
        assert_eq!(group_digits("999", ","), "999");
        assert_eq!(group_digits("0", ","), "0");
    }

    #[test]
    fn english_fallback_without_store() {
        let store = LocaleStore::new();
        let chain = vec!["en".parse().unwrap()];
        let formatter = LocaleFormatter::new(&store, &chain);
        assert_eq!(
            formatter.localize(&Localizable::Float(-5000.5), "default"),
            Some("\u{2212}5,000.5".to_string())
        );
        assert_eq!(
            formatter.localize(&Localizable::Integer(1234567), "default"),
            Some("1,234,567".to_string())
        );
    }
}
