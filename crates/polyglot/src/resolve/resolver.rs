//! Key path resolution.

use crate::error::compute_suggestions;
use crate::types::{Entry, PluralKey, Tree};

/// The node a path addresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// A leaf, list, plural node or interior node.
    Entry(&'a Entry),
    /// A single variant of a plural node, addressed as `users.other`.
    Variant(&'a str),
}

/// Why a walk stopped, with keys near the point of failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unresolved {
    pub suggestions: Vec<String>,
}

impl Unresolved {
    fn near(segment: &str, siblings: &[String]) -> Self {
        Self {
            suggestions: compute_suggestions(segment, siblings),
        }
    }
}

/// Split scope and key into path segments, scope first.
///
/// Empty segments are dropped, so leading, trailing and doubled separators
/// are harmless.
///
/// # Example
///
/// ```
/// use polyglot::split_key;
///
/// assert_eq!(split_key("another.level", Some("in"), "."), ["in", "another", "level"]);
/// assert_eq!(split_key("in/another", None, "/"), ["in", "another"]);
/// ```
pub fn split_key(key: &str, scope: Option<&str>, separator: &str) -> Vec<String> {
    let split = |text: &str| -> Vec<String> {
        if separator.is_empty() {
            return vec![text.to_string()];
        }
        text.split(separator)
            .filter(|segment| !segment.is_empty())
            .map(ToString::to_string)
            .collect()
    };
    let mut segments = scope.map(split).unwrap_or_default();
    segments.extend(split(key));
    segments
}

/// Walk `root` along `segments`.
///
/// Fails if a segment is absent, if the path continues past a leaf, or if a
/// plural variant is addressed with more segments after it.
pub fn walk<'a>(root: &'a Tree, segments: &[String]) -> Result<Node<'a>, Unresolved> {
    let Some((first, rest)) = segments.split_first() else {
        return Err(Unresolved::default());
    };
    let Some(mut current) = root.get(first) else {
        let siblings: Vec<String> = root.keys().cloned().collect();
        return Err(Unresolved::near(first, &siblings));
    };

    for (index, segment) in rest.iter().enumerate() {
        match current {
            Entry::Tree(tree) => {
                current = match tree.get(segment) {
                    Some(entry) => entry,
                    None => return Err(Unresolved::near(segment, &current.child_names())),
                };
            }
            Entry::Plural(forms) => {
                let is_last = index + 1 == rest.len();
                let variant = PluralKey::parse(segment).and_then(|key| forms.get(key));
                return match (is_last, variant) {
                    (true, Some(template)) => Ok(Node::Variant(template)),
                    (true, None) => Err(Unresolved::near(segment, &current.child_names())),
                    (false, _) => Err(Unresolved::default()),
                };
            }
            Entry::Leaf(_) | Entry::List(_) => return Err(Unresolved::default()),
        }
    }

    Ok(Node::Entry(current))
}
