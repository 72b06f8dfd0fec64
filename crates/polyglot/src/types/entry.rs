use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};

/// The interior of a locale: path segment to entry.
pub type Tree = BTreeMap<String, Entry>;

/// A node in a locale's translation tree.
///
/// A path resolves to exactly one node. Leaves, lists and plural variants end
/// the path: addressing anything below them fails resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Entry {
    /// A scalar value.
    Leaf(Leaf),
    /// A sequence, e.g. `date.month_names`.
    List(Vec<Entry>),
    /// Variants selected by a count.
    Plural(PluralForms),
    /// Nested entries.
    Tree(Tree),
}

/// A scalar leaf value as it appears in a locale file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Leaf {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Entry {
    /// Create a text leaf.
    pub fn text(s: impl Into<String>) -> Self {
        Entry::Leaf(Leaf::Text(s.into()))
    }

    /// Get the nested tree, if this is an interior node.
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Entry::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Get the text, if this is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Leaf(Leaf::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Keys directly below this node, in order.
    ///
    /// Plural nodes list their variants under their Rails category names.
    pub fn child_names(&self) -> Vec<String> {
        match self {
            Entry::Tree(tree) => tree.keys().cloned().collect(),
            Entry::Plural(forms) => forms.keys().map(PluralKey::rails_name).collect(),
            Entry::Leaf(_) | Entry::List(_) => Vec::new(),
        }
    }

    /// Collect the dotted paths of every non-interior node below this one.
    pub fn leaf_paths(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            Entry::Tree(tree) => {
                for (name, child) in tree {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    child.leaf_paths(&path, out);
                }
            }
            Entry::Leaf(_) | Entry::List(_) | Entry::Plural(_) => out.push(prefix.to_string()),
        }
    }
}

/// A plural category key.
///
/// Exact keys match one count (`0`, `1`, `2`); `Other` is the generic bucket
/// written `n` in `!pl` nodes and `other`/`many` in Rails files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralKey {
    Exact(u64),
    Other,
}

impl PluralKey {
    /// Map a Rails plural category name to a key.
    ///
    /// `two` and `few` share the `2` bucket, `many` and `other` share `n`.
    pub fn from_rails_name(name: &str) -> Option<Self> {
        match name {
            "zero" => Some(PluralKey::Exact(0)),
            "one" => Some(PluralKey::Exact(1)),
            "two" | "few" => Some(PluralKey::Exact(2)),
            "many" | "other" => Some(PluralKey::Other),
            _ => None,
        }
    }

    /// Parse a path segment addressing a plural variant.
    ///
    /// Accepts Rails names, `n`, and non-negative integers.
    pub fn parse(segment: &str) -> Option<Self> {
        if segment == "n" {
            return Some(PluralKey::Other);
        }
        if let Ok(n) = segment.parse::<u64>() {
            return Some(PluralKey::Exact(n));
        }
        Self::from_rails_name(segment)
    }

    /// The Rails name used when a plural node is returned as a map.
    pub fn rails_name(&self) -> String {
        match self {
            PluralKey::Exact(0) => "zero".to_string(),
            PluralKey::Exact(1) => "one".to_string(),
            PluralKey::Exact(2) => "few".to_string(),
            PluralKey::Exact(n) => n.to_string(),
            PluralKey::Other => "other".to_string(),
        }
    }
}

impl Display for PluralKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PluralKey::Exact(n) => write!(f, "{n}"),
            PluralKey::Other => write!(f, "n"),
        }
    }
}

impl Serialize for PluralKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Templates of a pluralized leaf, keyed by plural category.
///
/// # Example
///
/// ```
/// use polyglot::{PluralForms, PluralKey};
///
/// let users: PluralForms = [
///     (PluralKey::Exact(0), "no users"),
///     (PluralKey::Exact(1), "1 user"),
///     (PluralKey::Other, "%{count} users"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(users.get(PluralKey::Other), Some("%{count} users"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PluralForms(BTreeMap<PluralKey, String>);

impl PluralForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variant, replacing any previous one for the same key.
    pub fn insert(&mut self, key: PluralKey, template: impl Into<String>) {
        self.0.insert(key, template.into());
    }

    /// Insert a variant only if the key is still free.
    pub fn insert_if_absent(&mut self, key: PluralKey, template: impl Into<String>) {
        self.0.entry(key).or_insert_with(|| template.into());
    }

    pub fn get(&self, key: PluralKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &PluralKey> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PluralKey, &String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` on top of these forms.
    pub fn extend(&mut self, other: PluralForms) {
        self.0.extend(other.0);
    }
}

impl<S: Into<String>> FromIterator<(PluralKey, S)> for PluralForms {
    fn from_iter<I: IntoIterator<Item = (PluralKey, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
