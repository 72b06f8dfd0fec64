//! Interpolation template parser using winnow.
//!
//! Parses translation strings into an AST. Handles:
//! - Literal text segments
//! - `%{name}` placeholders
//! - Legacy `{{name}}` placeholders
//! - The `%%{` escape, which yields a literal `%{`
//!
//! Anything that does not form a placeholder is literal text, so parsing
//! never fails.

use super::ast::{PlaceholderStyle, Segment, Template};
use winnow::combinator::{alt, delimited, peek, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template::literal(input),
    }
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder { .. } => result.push(other),
        }
    }

    result
}

/// Parse a single segment.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        escape_sequence,
        percent_placeholder,
        legacy_placeholder,
        literal_run,
        literal_char,
    ))
    .parse_next(input)
}

/// Parse the `%%` of `%%{` -> `%`. A `%%` elsewhere is plain text.
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    terminated("%%", peek('{'))
        .value(Segment::Literal("%".to_string()))
        .parse_next(input)
}

/// Parse `%{name}`.
fn percent_placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("%{", identifier, '}')
        .map(|name: &str| Segment::Placeholder {
            name: name.to_string(),
            style: PlaceholderStyle::Percent,
        })
        .parse_next(input)
}

/// Parse `{{name}}`, allowing spaces inside the braces.
fn legacy_placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(("{{", spaces), identifier, (spaces, "}}"))
        .map(|name: &str| Segment::Placeholder {
            name: name.to_string(),
            style: PlaceholderStyle::Legacy,
        })
        .parse_next(input)
}

/// Parse a run of text that cannot start a placeholder.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_till(1.., ['%', '{'])
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a single `%` or `{` that did not start a placeholder.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

fn spaces(input: &mut &str) -> ModalResult<()> {
    take_while(0.., ' ').void().parse_next(input)
}

/// Parse a variable name (alphanumeric with underscores).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(name: &str, style: PlaceholderStyle) -> Segment {
        Segment::Placeholder {
            name: name.to_string(),
            style,
        }
    }

    #[test]
    fn plain_text_is_one_literal() {
        let t = parse_template("Hierarchical");
        assert_eq!(t.segments, vec![Segment::Literal("Hierarchical".into())]);
    }

    #[test]
    fn percent_and_legacy_placeholders() {
        let t = parse_template("%{count} users, {{ name }}!");
        assert_eq!(
            t.segments,
            vec![
                placeholder("count", PlaceholderStyle::Percent),
                Segment::Literal(" users, ".into()),
                placeholder("name", PlaceholderStyle::Legacy),
                Segment::Literal("!".into()),
            ]
        );
    }

    #[test]
    fn double_percent_escapes_placeholder() {
        let t = parse_template("%%{scope} and 100%");
        assert_eq!(t.segments, vec![Segment::Literal("%{scope} and 100%".into())]);
    }

    #[test]
    fn double_percent_without_brace_is_kept() {
        let t = parse_template("100%% sure");
        assert_eq!(t.segments, vec![Segment::Literal("100%% sure".into())]);
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        let t = parse_template("%{oops and {{also");
        assert_eq!(t.segments, vec![Segment::Literal("%{oops and {{also".into())]);
    }

    #[test]
    fn source_text_round_trips_placeholders() {
        let t = parse_template("{{value}} %{value}");
        let rebuilt: String = t.segments.iter().map(Segment::source_text).collect();
        assert_eq!(rebuilt, "{{value}} %{value}");
    }
}
