//! The translation backend: configuration, the current locale snapshot and
//! the lookup API.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use bon::Builder;
use tracing::{debug, info, warn};

use crate::error::{LoadError, MissingTranslationData};
use crate::format::{LocaleFormatter, Localizable};
use crate::resolve::{
    DefaultValue, Node, TranslateOptions, interpolate, select, split_key, walk,
};
use crate::store::{LocaleStore, merge_trees};
use crate::transliterate::transliterate;
use crate::types::{Entry, InvalidLocale, Leaf, LocaleTag, Translation, Tree};

/// Resolves translations against locale files on a load path.
///
/// Lookups read an immutable [`LocaleStore`] snapshot. [`Backend::reload`]
/// builds a new snapshot from the current load path and swaps it in; calls
/// already in flight keep using the snapshot they started with.
///
/// # Example
///
/// ```
/// use polyglot::{Backend, TranslateOptions};
///
/// let backend = Backend::builder().default_locale("en").build();
/// assert!(backend.available_locales().is_empty());
/// assert!(backend.translate("en", "missing", &TranslateOptions::default()).is_err());
/// ```
#[derive(Debug, Builder)]
pub struct Backend {
    /// Files, directories and glob patterns to load, in order.
    #[builder(default)]
    load_path: Vec<String>,

    /// Last locale of every fallback chain.
    #[builder(into, default = "en".to_string())]
    default_locale: String,

    /// Whether lookups fall back to the default locale.
    #[builder(default = true)]
    fallbacks: bool,

    #[builder(skip = RwLock::new(Arc::new(LocaleStore::new())))]
    store: RwLock<Arc<LocaleStore>>,
}

impl Backend {
    /// Build a backend with default settings and load `load_path`.
    pub fn load<I, S>(load_path: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Backend::builder()
            .load_path(load_path.into_iter().map(Into::into).collect())
            .build();
        backend.reload()?;
        Ok(backend)
    }

    /// The snapshot lookups currently resolve against.
    pub fn snapshot(&self) -> Arc<LocaleStore> {
        Arc::clone(&self.store.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Rebuild the snapshot from the load path.
    ///
    /// Returns whether the content fingerprint changed. On failure the
    /// previous snapshot stays in place.
    pub fn reload(&self) -> Result<bool, LoadError> {
        let store = match LocaleStore::load(&self.load_path) {
            Ok(store) => store,
            Err(err) => {
                warn!(error = %err, "reload failed, keeping previous locale data");
                return Err(err);
            }
        };

        let mut current = self.store.write().unwrap_or_else(PoisonError::into_inner);
        let changed = current.fingerprint() != store.fingerprint();
        info!(
            locales = store.locales().count(),
            files = store.files().len(),
            fingerprint = %format!("{:016x}", store.fingerprint()),
            changed,
            "loaded locale data"
        );
        *current = Arc::new(store);
        Ok(changed)
    }

    pub fn load_path(&self) -> &[String] {
        &self.load_path
    }

    /// Replace the load path. Takes effect on the next [`Backend::reload`].
    pub fn set_load_path(&mut self, load_path: Vec<String>) {
        self.load_path = load_path;
    }

    /// Append to the load path. Takes effect on the next [`Backend::reload`].
    pub fn push_load_path(&mut self, entry: impl Into<String>) {
        self.load_path.push(entry.into());
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Fingerprint of the current snapshot.
    pub fn fingerprint(&self) -> u64 {
        self.snapshot().fingerprint()
    }

    /// Loaded locales, sorted.
    pub fn available_locales(&self) -> Vec<LocaleTag> {
        self.snapshot().locales().cloned().collect()
    }

    /// Look up `key` for `locale`.
    ///
    /// Text leaves and plural variants are interpolated with the call's
    /// variables and count. Interior nodes, lists, non-text leaves and plural
    /// nodes looked up without a count are returned as raw data. When the
    /// key does not resolve in any locale of the fallback chain, the default
    /// is tried before failing.
    pub fn translate(
        &self,
        locale: &str,
        key: &str,
        options: &TranslateOptions,
    ) -> Result<Translation, MissingTranslationData> {
        let locale = options.locale.as_deref().unwrap_or(locale);
        let store = self.snapshot();
        let chain = self.chain(locale).map_err(|_| {
            let path = split_key(key, options.scope.as_deref(), &options.separator).join(".");
            MissingTranslationData::new(locale, key, options.scope.as_deref(), path)
        })?;
        let lookup = Lookup {
            store: &store,
            chain: &chain,
            locale,
            options,
        };

        let missing = match lookup.resolve(key, options.scope.as_deref()) {
            Ok(translation) => return Ok(translation),
            Err(missing) => missing,
        };
        let Some(default) = &options.default else {
            return Err(missing);
        };
        match lookup.try_default(key, default) {
            Some(translation) => {
                debug!(locale, key, "using default for missing translation");
                Ok(translation)
            }
            None => Err(missing),
        }
    }

    /// Look up several keys with the same options, in order.
    pub fn translate_many(
        &self,
        locale: &str,
        keys: &[&str],
        options: &TranslateOptions,
    ) -> Result<Translation, MissingTranslationData> {
        keys.iter()
            .map(|key| self.translate(locale, key, options))
            .collect::<Result<Vec<_>, _>>()
            .map(Translation::List)
    }

    /// Format a date, time or number for `locale`.
    ///
    /// `format` names a pattern under `date.formats` or `time.formats`
    /// (`default` when absent). Numbers ignore it.
    pub fn localize(
        &self,
        locale: &str,
        object: impl Into<Localizable>,
        format: Option<&str>,
    ) -> Result<String, MissingTranslationData> {
        let object = object.into();
        let name = format.unwrap_or("default");
        let missing = || {
            let scope = match object.format_kind() {
                Some(kind) => format!("{}.formats", kind.key()),
                None => "number.format".to_string(),
            };
            let path = format!("{scope}.{name}");
            MissingTranslationData::new(locale, name, Some(&scope), path)
        };

        let store = self.snapshot();
        let chain = self.chain(locale).map_err(|_| missing())?;
        LocaleFormatter::new(&store, &chain)
            .localize(&object, name)
            .ok_or_else(missing)
    }

    /// Strip accents and other combining marks.
    pub fn transliterate(&self, text: &str) -> String {
        transliterate(text)
    }

    /// Dotted paths of every leaf, list and plural node of `locale`, sorted.
    ///
    /// Empty when the locale is not loaded.
    pub fn keys(&self, locale: &str) -> Vec<String> {
        leaf_paths(&self.snapshot(), locale)
    }

    /// Dotted paths present in `source` but not in `target`, sorted.
    pub fn missing_keys(&self, source: &str, target: &str) -> Vec<String> {
        let store = self.snapshot();
        let target: BTreeSet<String> = leaf_paths(&store, target).into_iter().collect();
        leaf_paths(&store, source)
            .into_iter()
            .filter(|path| !target.contains(path))
            .collect()
    }

    /// Lookup order for `locale`: the tag, its base language, then the
    /// default locale when fallbacks are enabled.
    fn chain(&self, locale: &str) -> Result<Vec<LocaleTag>, InvalidLocale> {
        let tag = LocaleTag::parse(locale)?;
        let default = if self.fallbacks {
            LocaleTag::parse(&self.default_locale).ok()
        } else {
            None
        };
        Ok(tag.fallback_chain(default.as_ref()))
    }
}

/// Every leaf path of a locale, empty when the locale is unknown.
fn leaf_paths(store: &LocaleStore, locale: &str) -> Vec<String> {
    let Some(root) = LocaleTag::parse(locale).ok().and_then(|tag| store.root(&tag)) else {
        return Vec::new();
    };
    let mut paths = Vec::new();
    for (name, entry) in root {
        entry.leaf_paths(name, &mut paths);
    }
    paths
}

/// One `translate` call against one snapshot.
struct Lookup<'a> {
    store: &'a LocaleStore,
    chain: &'a [LocaleTag],
    locale: &'a str,
    options: &'a TranslateOptions,
}

impl Lookup<'_> {
    /// Resolve `key` under `scope` along the fallback chain.
    fn resolve(&self, key: &str, scope: Option<&str>) -> Result<Translation, MissingTranslationData> {
        let segments = split_key(key, scope, &self.options.separator);
        let mut suggestions = Vec::new();
        for (position, tag) in self.chain.iter().enumerate() {
            let Some(root) = self.store.root(tag) else {
                continue;
            };
            match walk(root, &segments) {
                Ok(Node::Entry(Entry::Tree(_))) => {
                    return Ok(self.merged_tree(&segments, position));
                }
                Ok(node) => {
                    if let Some(translation) = self.render(node, tag) {
                        return Ok(translation);
                    }
                }
                Err(unresolved) if suggestions.is_empty() => suggestions = unresolved.suggestions,
                Err(_) => {}
            }
        }
        Err(
            MissingTranslationData::new(self.locale, key, scope, segments.join("."))
                .with_suggestions(suggestions),
        )
    }

    /// The interior node at `segments`, merged over the chain from
    /// `position` on. Earlier locales win.
    fn merged_tree(&self, segments: &[String], position: usize) -> Translation {
        let mut merged = Tree::new();
        for tag in self.chain.iter().skip(position).rev() {
            let Some(root) = self.store.root(tag) else {
                continue;
            };
            if let Ok(Node::Entry(Entry::Tree(tree))) = walk(root, segments) {
                merge_trees(&mut merged, tree.clone());
            }
        }
        Translation::from(&Entry::Tree(merged))
    }

    /// Turn a resolved node into a result. `None` when a counted plural node
    /// has no matching variant.
    fn render(&self, node: Node<'_>, tag: &LocaleTag) -> Option<Translation> {
        let fill = |template: &str| {
            Translation::Text(interpolate(template, |name| self.options.variable(name)))
        };
        match node {
            Node::Variant(template) => Some(fill(template)),
            Node::Entry(Entry::Leaf(Leaf::Text(template))) => Some(fill(template)),
            Node::Entry(entry) => match (entry, self.options.count) {
                (Entry::Plural(forms), Some(count)) => select(forms, tag.language(), count).map(fill),
                _ => Some(Translation::from(entry)),
            },
        }
    }

    /// Try a default. `key` is the key of the original call.
    fn try_default(&self, key: &str, default: &DefaultValue) -> Option<Translation> {
        match default {
            DefaultValue::Literal(text) => Some(Translation::Text(text.clone())),
            DefaultValue::Key(alternate) => {
                let separator = self.options.separator.as_str();
                let absolute = if separator.is_empty() {
                    None
                } else {
                    alternate.strip_prefix(separator)
                };
                match absolute {
                    Some(alternate) => self.resolve(alternate, None).ok(),
                    None => self.resolve(alternate, self.options.scope.as_deref()).ok(),
                }
            }
            DefaultValue::Chain(items) => items.iter().find_map(|item| self.try_default(key, item)),
            DefaultValue::Computed(f) => {
                Some(Translation::Text(f(key, &self.options.without_default())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(yaml: &str) -> Backend {
        let backend = Backend::builder().build();
        *backend.store.write().unwrap() = Arc::new(LocaleStore::from_yaml(yaml).unwrap());
        backend
    }

    #[test]
    fn plural_node_without_count_is_raw() {
        let backend = backend("en:\n  users:\n    one: one user\n    other: '%{count} users'\n");
        let result = backend
            .translate("en", "users", &TranslateOptions::default())
            .unwrap();
        let map = result.as_map().unwrap();
        assert_eq!(map["one"], "one user");
        assert_eq!(map["other"], "%{count} users");
    }

    #[test]
    fn counted_plural_without_matching_variant_is_missing() {
        let backend = backend("en:\n  things: !pl\n    1: one thing\n");
        assert!(backend.translate("en", "things", &TranslateOptions::with_count(1)).is_ok());
        assert!(backend.translate("en", "things", &TranslateOptions::with_count(5)).is_err());
    }

    #[test]
    fn invalid_locale_is_missing_translation() {
        let backend = backend("en:\n  a: b\n");
        let err = backend
            .translate("not a locale!", "a", &TranslateOptions::default())
            .unwrap_err();
        assert_eq!(err.key, "a");
    }

    #[test]
    fn fallbacks_can_be_disabled() {
        let backend = Backend::builder().fallbacks(false).build();
        *backend.store.write().unwrap() =
            Arc::new(LocaleStore::from_yaml("en:\n  only_en: English\n").unwrap());
        assert!(backend.translate("ru", "only_en", &TranslateOptions::default()).is_err());
        assert!(backend.translate("en", "only_en", &TranslateOptions::default()).is_ok());
    }
}
