//! Locale file discovery and parsing.
//!
//! Files use the Rails layout: a top-level mapping from locale tag to a tree
//! of translations. Mappings whose keys are all Rails plural categories
//! (`zero`, `one`, `two`, `few`, `many`, `other`) become plural nodes, as do
//! mappings tagged `!pl` with integer and `n` keys.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value as Yaml;
use tracing::debug;

use crate::error::LoadError;
use crate::types::{Entry, Leaf, LocaleTag, PluralForms, PluralKey, Tree};

/// File extensions recognized as locale files.
const EXTENSIONS: &[&str] = &["yml", "yaml", "json"];

/// Rails plural names in precedence order: `few` wins over `two` and `many`
/// over `other` when both land in the same bucket.
const RAILS_PLURAL_NAMES: &[&str] = &["zero", "one", "few", "two", "many", "other"];

/// The locales defined by one file, in file order.
pub type ParsedFile = Vec<(LocaleTag, Tree)>;

/// Expand the load path into concrete files, in load order.
///
/// Each entry is a directory (its locale files, sorted), a glob pattern
/// (matches sorted) or a plain file path.
pub fn expand_load_path(patterns: &[String]) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|e| LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            let mut found: Vec<PathBuf> = entries
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|p| p.is_file() && is_locale_file(p))
                .collect();
            found.sort();
            files.extend(found);
        } else if is_glob(pattern) {
            let matches = glob::glob(pattern).map_err(|e| LoadError::Pattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            let mut found: Vec<PathBuf> = matches
                .filter_map(Result::ok)
                .filter(|p| p.is_file() && is_locale_file(p))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn is_locale_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// Read and parse a locale file.
pub fn load_file(path: &Path) -> Result<ParsedFile, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let is_json = path.extension().and_then(OsStr::to_str) == Some("json");
    let parsed = if is_json {
        parse_json(&content, path)?
    } else {
        parse_yaml(&content, path)?
    };
    debug!(
        path = %path.display(),
        locales = parsed.len(),
        "parsed locale file"
    );
    Ok(parsed)
}

/// Parse YAML locale content. `origin` is only used in error messages.
pub fn parse_yaml(content: &str, origin: &Path) -> Result<ParsedFile, LoadError> {
    let document: Yaml = serde_yaml::from_str(content).map_err(|e| {
        let (line, column) = e
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((0, 0));
        LoadError::Parse {
            path: origin.to_path_buf(),
            line,
            column,
            message: e.to_string(),
        }
    })?;
    convert_document(document, origin)
}

/// Parse JSON locale content. `origin` is only used in error messages.
pub fn parse_json(content: &str, origin: &Path) -> Result<ParsedFile, LoadError> {
    let document: serde_json::Value =
        serde_json::from_str(content).map_err(|e| LoadError::Parse {
            path: origin.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;
    let document = serde_yaml::to_value(document)
        .map_err(|e| structure_error(origin, &e.to_string()))?;
    convert_document(document, origin)
}

fn structure_error(origin: &Path, message: &str) -> LoadError {
    LoadError::Parse {
        path: origin.to_path_buf(),
        line: 0,
        column: 0,
        message: message.to_string(),
    }
}

/// Convert a whole document: locale tag -> tree.
fn convert_document(document: Yaml, origin: &Path) -> Result<ParsedFile, LoadError> {
    let mapping = match document {
        Yaml::Null => return Ok(Vec::new()),
        Yaml::Mapping(mapping) => mapping,
        _ => {
            return Err(structure_error(
                origin,
                "top level must map locale names to translations",
            ));
        }
    };

    let mut locales = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = key_to_string(&key)
            .ok_or_else(|| structure_error(origin, "locale name must be a scalar"))?;
        let tag = LocaleTag::parse(&name).map_err(|source| LoadError::InvalidLocale {
            path: origin.to_path_buf(),
            source,
        })?;
        let tree = match value {
            Yaml::Null => Tree::new(),
            Yaml::Mapping(mapping) => convert_tree(mapping, origin)?,
            _ => {
                return Err(structure_error(
                    origin,
                    &format!("locale '{name}' must contain a mapping"),
                ));
            }
        };
        locales.push((tag, tree));
    }
    Ok(locales)
}

fn convert_tree(mapping: serde_yaml::Mapping, origin: &Path) -> Result<Tree, LoadError> {
    let mut tree = Tree::new();
    for (key, value) in mapping {
        let name = key_to_string(&key)
            .ok_or_else(|| structure_error(origin, "translation keys must be scalars"))?;
        if let Some(entry) = convert_value(value, origin)? {
            tree.insert(name, entry);
        }
    }
    Ok(tree)
}

/// Convert one value. Nulls yield `None` and are left out of the tree.
fn convert_value(value: Yaml, origin: &Path) -> Result<Option<Entry>, LoadError> {
    let entry = match value {
        Yaml::Null => return Ok(None),
        Yaml::Bool(b) => Entry::Leaf(Leaf::Bool(b)),
        Yaml::Number(n) => match n.as_i64() {
            Some(i) => Entry::Leaf(Leaf::Integer(i)),
            None => Entry::Leaf(Leaf::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        Yaml::String(s) => Entry::Leaf(Leaf::Text(s)),
        Yaml::Sequence(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                if let Some(entry) = convert_value(item, origin)? {
                    list.push(entry);
                }
            }
            Entry::List(list)
        }
        Yaml::Mapping(mapping) => match rails_plural(&mapping) {
            Some(forms) => Entry::Plural(forms),
            None => Entry::Tree(convert_tree(mapping, origin)?),
        },
        Yaml::Tagged(tagged) => {
            if tagged.tag == "pl" {
                Entry::Plural(tagged_plural(tagged.value, origin)?)
            } else {
                return convert_value(tagged.value, origin);
            }
        }
    };
    Ok(Some(entry))
}

/// Recognize a Rails plural hash: every key a plural name, every value text.
fn rails_plural(mapping: &serde_yaml::Mapping) -> Option<PluralForms> {
    if mapping.is_empty() {
        return None;
    }
    let all_plural = mapping.iter().all(|(key, value)| {
        key.as_str().is_some_and(|k| PluralKey::from_rails_name(k).is_some())
            && (value.is_string() || value.is_null())
    });
    if !all_plural {
        return None;
    }

    let mut forms = PluralForms::new();
    for name in RAILS_PLURAL_NAMES {
        let Some(template) = mapping.get(*name).and_then(Yaml::as_str) else {
            continue;
        };
        if let Some(key) = PluralKey::from_rails_name(name) {
            forms.insert_if_absent(key, template);
        }
    }
    Some(forms)
}

/// Convert a `!pl` node: integer, `n` or Rails-name keys.
fn tagged_plural(value: Yaml, origin: &Path) -> Result<PluralForms, LoadError> {
    let Yaml::Mapping(mapping) = value else {
        return Err(structure_error(origin, "!pl must tag a mapping"));
    };
    let mut forms = PluralForms::new();
    for (key, value) in mapping {
        let name = key_to_string(&key)
            .ok_or_else(|| structure_error(origin, "plural keys must be scalars"))?;
        let plural_key = PluralKey::parse(&name)
            .ok_or_else(|| structure_error(origin, &format!("unknown plural key '{name}'")))?;
        let template = match value {
            Yaml::Null => continue,
            Yaml::String(s) => s,
            other => key_to_string(&other).ok_or_else(|| {
                structure_error(origin, &format!("plural variant '{name}' must be text"))
            })?,
        };
        forms.insert(plural_key, template);
    }
    Ok(forms)
}

fn key_to_string(key: &Yaml) -> Option<String> {
    match key {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
