//! Variable substitution.

use crate::parser::{Segment, parse_template};
use crate::resolve::Vars;

/// Substitute placeholders in `template` with values from `lookup`.
///
/// Placeholders `lookup` does not know are left in the output exactly as
/// written. `%%{` yields a literal `%{`; any other `%%` is kept as is.
pub fn interpolate(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    if !template.contains(['%', '{']) {
        return template.to_string();
    }

    let parsed = parse_template(template);
    let mut output = String::with_capacity(template.len());
    for segment in &parsed.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder { name, .. } => match lookup(name) {
                Some(value) => output.push_str(&value),
                None => output.push_str(&segment.source_text()),
            },
        }
    }
    output
}

/// Substitute placeholders from a variables map.
///
/// # Example
///
/// ```
/// use polyglot::{interpolate_vars, vars};
///
/// let text = interpolate_vars("Value is {{value}}, %{missing}", &vars! { "value" => "Old" });
/// assert_eq!(text, "Value is Old, %{missing}");
/// ```
pub fn interpolate_vars(template: &str, vars: &Vars) -> String {
    interpolate(template, |name| vars.get(name).map(ToString::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars;

    #[test]
    fn substitutes_both_placeholder_styles() {
        let v = vars! { "count" => 5, "name" => "Ann" };
        assert_eq!(interpolate_vars("%{count} users", &v), "5 users");
        assert_eq!(interpolate_vars("Hi {{name}}", &v), "Hi Ann");
    }

    #[test]
    fn unknown_placeholders_stay_literal() {
        assert_eq!(
            interpolate_vars("%{scope} is not here", &vars! {}),
            "%{scope} is not here"
        );
    }

    #[test]
    fn text_without_markers_is_untouched() {
        assert_eq!(interpolate_vars("Hierarchical", &vars! {}), "Hierarchical");
    }

    #[test]
    fn percent_escape_only_before_brace() {
        let v = vars! { "n" => 3 };
        assert_eq!(interpolate_vars("100%% sure", &v), "100%% sure");
        assert_eq!(interpolate_vars("%%{n} is %{n}", &v), "%{n} is 3");
    }
}
