//! strftime-style format string parser.
//!
//! Recognized conversions become [`FormatItem::Directive`]; a `-` flag
//! (`%-d`) turns off zero padding. Unknown conversions and a trailing `%`
//! are kept as literal text.

use super::ast::{DateFormat, Directive, FormatItem};
use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_till};

/// Parse a format string such as `"%a, %d %b %Y"`.
pub fn parse_date_format(input: &str) -> DateFormat {
    let mut remaining = input;
    let parsed: ModalResult<Vec<FormatItem>> = repeat(0.., item).parse_next(&mut remaining);
    match parsed {
        Ok(items) if remaining.is_empty() => DateFormat { items },
        _ => DateFormat {
            items: vec![FormatItem::Literal(input.to_string())],
        },
    }
}

fn item(input: &mut &str) -> ModalResult<FormatItem> {
    alt((
        "%%".value(FormatItem::Literal("%".to_string())),
        directive,
        take_till(1.., '%').map(|s: &str| FormatItem::Literal(s.to_string())),
        any.map(|c: char| FormatItem::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Parse `%X` or `%-X` for a known conversion letter.
fn directive(input: &mut &str) -> ModalResult<FormatItem> {
    preceded('%', (opt('-'), any))
        .verify_map(|(flag, c): (Option<char>, char)| {
            Directive::from_char(c).map(|directive| FormatItem::Directive {
                directive,
                padded: flag.is_none(),
            })
        })
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(directive: Directive) -> FormatItem {
        FormatItem::Directive {
            directive,
            padded: true,
        }
    }

    #[test]
    fn parses_rfc2822_like_format() {
        let format = parse_date_format("%a, %d %b %Y");
        assert_eq!(
            format.items,
            vec![
                d(Directive::AbbrDayName),
                FormatItem::Literal(", ".into()),
                d(Directive::Day),
                FormatItem::Literal(" ".into()),
                d(Directive::AbbrMonthName),
                FormatItem::Literal(" ".into()),
                d(Directive::Year),
            ]
        );
    }

    #[test]
    fn dash_flag_disables_padding() {
        let format = parse_date_format("%-d.%-m.");
        assert_eq!(
            format.items[0],
            FormatItem::Directive {
                directive: Directive::Day,
                padded: false,
            }
        );
    }

    #[test]
    fn unknown_directive_and_escape_stay_literal() {
        let format = parse_date_format("%q 100%%");
        let text: String = format
            .items
            .iter()
            .map(|item| match item {
                FormatItem::Literal(s) => s.clone(),
                FormatItem::Directive { .. } => "?".to_string(),
            })
            .collect();
        assert_eq!(text, "%q 100%");
    }
}
