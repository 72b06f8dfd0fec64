//! AST types for interpolation templates and date format strings.
//!
//! These types are public to enable external tooling (linters, coverage
//! reports, etc.).

/// A parsed translation template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// A template consisting of a single literal run.
    pub fn literal(text: &str) -> Self {
        Self {
            segments: vec![Segment::Literal(text.to_string())],
        }
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text (no interpolation).
    Literal(String),
    /// A named variable: `%{name}` or `{{name}}`.
    Placeholder { name: String, style: PlaceholderStyle },
}

impl Segment {
    /// The placeholder as written in the source, used when it stays unresolved.
    pub fn source_text(&self) -> String {
        match self {
            Segment::Literal(text) => text.clone(),
            Segment::Placeholder {
                name,
                style: PlaceholderStyle::Percent,
            } => format!("%{{{name}}}"),
            Segment::Placeholder {
                name,
                style: PlaceholderStyle::Legacy,
            } => format!("{{{{{name}}}}}"),
        }
    }
}

/// The syntax a placeholder was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `%{name}`
    Percent,
    /// `{{name}}`, kept for older locale files.
    Legacy,
}

/// A parsed strftime-style format string.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFormat {
    pub items: Vec<FormatItem>,
}

/// One piece of a date format.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatItem {
    Literal(String),
    Directive { directive: Directive, padded: bool },
}

/// A strftime conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%Y`
    Year,
    /// `%y`
    ShortYear,
    /// `%m`
    Month,
    /// `%d`
    Day,
    /// `%e`, space padded
    DaySpace,
    /// `%j`
    DayOfYear,
    /// `%H`
    Hour24,
    /// `%I`
    Hour12,
    /// `%M`
    Minute,
    /// `%S`
    Second,
    /// `%p`
    Meridian,
    /// `%z`
    Offset,
    /// `%a`
    AbbrDayName,
    /// `%A`
    DayName,
    /// `%b`
    AbbrMonthName,
    /// `%B`
    MonthName,
    /// `%O`, ordinal day of month such as `1st`
    OrdinalDay,
}

impl Directive {
    /// Look up the conversion for a strftime letter.
    pub fn from_char(c: char) -> Option<Self> {
        let directive = match c {
            'Y' => Directive::Year,
            'y' => Directive::ShortYear,
            'm' => Directive::Month,
            'd' => Directive::Day,
            'e' => Directive::DaySpace,
            'j' => Directive::DayOfYear,
            'H' => Directive::Hour24,
            'I' => Directive::Hour12,
            'M' => Directive::Minute,
            'S' => Directive::Second,
            'p' => Directive::Meridian,
            'z' => Directive::Offset,
            'a' => Directive::AbbrDayName,
            'A' => Directive::DayName,
            'b' => Directive::AbbrMonthName,
            'B' => Directive::MonthName,
            'O' => Directive::OrdinalDay,
            _ => return None,
        };
        Some(directive)
    }
}
