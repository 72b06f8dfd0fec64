//! In-memory locale data.
//!
//! A [`LocaleStore`] is an immutable snapshot: every locale's merged tree,
//! the files it was built from and a fingerprint of its contents. Reloading
//! builds a new store rather than mutating an existing one.

mod loader;
mod merge;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use const_fnv1a_hash::fnv1a_hash_str_64;
use tracing::debug;

use crate::error::LoadError;
use crate::types::{LocaleTag, Tree};

pub use loader::{expand_load_path, load_file, parse_json, parse_yaml};
pub use merge::merge_trees;

/// Merged translations for every loaded locale.
///
/// # Example
///
/// ```
/// use polyglot::LocaleStore;
///
/// let store = LocaleStore::from_yaml("en:\n  hello: Hello\n").unwrap();
/// let en = "en".parse().unwrap();
/// assert!(store.root(&en).unwrap().contains_key("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    locales: BTreeMap<LocaleTag, Tree>,
    files: Vec<PathBuf>,
    fingerprint: u64,
}

impl LocaleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::from_locales(BTreeMap::new())
    }

    /// Build a store from already merged trees.
    pub fn from_locales(locales: BTreeMap<LocaleTag, Tree>) -> Self {
        let fingerprint = compute_fingerprint(&locales);
        Self {
            locales,
            files: Vec::new(),
            fingerprint,
        }
    }

    /// Read every file the load path expands to and merge them per locale.
    ///
    /// Later files override earlier ones at the leaf level.
    pub fn load(load_path: &[String]) -> Result<Self, LoadError> {
        let files = expand_load_path(load_path)?;
        let mut locales: BTreeMap<LocaleTag, Tree> = BTreeMap::new();
        for file in &files {
            for (tag, tree) in load_file(file)? {
                merge_trees(locales.entry(tag).or_default(), tree);
            }
        }
        let fingerprint = compute_fingerprint(&locales);
        debug!(
            files = files.len(),
            locales = locales.len(),
            fingerprint = %format!("{fingerprint:016x}"),
            "built locale store"
        );
        Ok(Self {
            locales,
            files,
            fingerprint,
        })
    }

    /// Build a store from YAML content in the locale file layout.
    pub fn from_yaml(content: &str) -> Result<Self, LoadError> {
        let mut locales: BTreeMap<LocaleTag, Tree> = BTreeMap::new();
        for (tag, tree) in parse_yaml(content, Path::new("<string>"))? {
            merge_trees(locales.entry(tag).or_default(), tree);
        }
        Ok(Self::from_locales(locales))
    }

    /// The merged tree of a locale, if any file defined it.
    pub fn root(&self, locale: &LocaleTag) -> Option<&Tree> {
        self.locales.get(locale)
    }

    /// Loaded locale tags, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleTag> {
        self.locales.keys()
    }

    /// Files this store was built from, in load order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Content-derived hash of the merged trees.
    ///
    /// Two stores with the same merged content have the same fingerprint,
    /// regardless of how many files contributed to it.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// FNV-1a over the canonical JSON form of the trees.
fn compute_fingerprint(locales: &BTreeMap<LocaleTag, Tree>) -> u64 {
    let canonical: BTreeMap<&str, &Tree> = locales
        .iter()
        .map(|(tag, tree)| (tag.as_str(), tree))
        .collect();
    let json = serde_json::to_string(&canonical).unwrap_or_default();
    fnv1a_hash_str_64(&json)
}
