use std::collections::BTreeMap;
use std::fmt::{Display, Error as FmtError, Formatter, Result as FmtResult};

use serde::Serialize;

use super::{Entry, Leaf};

/// The result of a successful lookup.
///
/// Leaves come back as text (interpolated and pluralized) or as their scalar
/// value; interior nodes come back as a map with string keys, and raw plural
/// nodes as a map keyed by Rails category names.
///
/// # Example
///
/// ```
/// use polyglot::Translation;
///
/// let t = Translation::Text("Hierarchical".to_string());
/// assert_eq!(t, "Hierarchical");
/// assert_eq!(t.to_string(), "Hierarchical");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Translation {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Map(BTreeMap<String, Translation>),
    List(Vec<Translation>),
}

impl Translation {
    /// Get the text, if this is a text result.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Translation::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the map, if this is an interior node.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Translation>> {
        match self {
            Translation::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get the items, if this is a sequence.
    pub fn as_list(&self) -> Option<&[Translation]> {
        match self {
            Translation::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&Leaf> for Translation {
    fn from(leaf: &Leaf) -> Self {
        match leaf {
            Leaf::Text(s) => Translation::Text(s.clone()),
            Leaf::Integer(n) => Translation::Integer(*n),
            Leaf::Float(n) => Translation::Float(*n),
            Leaf::Bool(b) => Translation::Bool(*b),
        }
    }
}

/// Raw conversion: templates are returned uninterpolated.
impl From<&Entry> for Translation {
    fn from(entry: &Entry) -> Self {
        match entry {
            Entry::Leaf(leaf) => leaf.into(),
            Entry::List(items) => Translation::List(items.iter().map(Into::into).collect()),
            Entry::Plural(forms) => Translation::Map(
                forms
                    .iter()
                    .map(|(key, template)| (key.rails_name(), Translation::Text(template.clone())))
                    .collect(),
            ),
            Entry::Tree(tree) => Translation::Map(
                tree.iter()
                    .map(|(name, child)| (name.clone(), child.into()))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Translation {
    fn from(s: &str) -> Self {
        Translation::Text(s.to_string())
    }
}

impl From<String> for Translation {
    fn from(s: String) -> Self {
        Translation::Text(s)
    }
}

impl PartialEq<str> for Translation {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Translation {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl Display for Translation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Translation::Text(s) => write!(f, "{s}"),
            Translation::Integer(n) => write!(f, "{n}"),
            Translation::Float(n) => write!(f, "{n}"),
            Translation::Bool(b) => write!(f, "{b}"),
            Translation::Map(_) | Translation::List(_) => {
                let json = serde_json::to_string(self).map_err(|_| FmtError)?;
                write!(f, "{json}")
            }
        }
    }
}
