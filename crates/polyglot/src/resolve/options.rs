//! Lookup options and default values.
//!
//! Control options (`scope`, `separator`, `default`, `locale`) and
//! interpolation variables live in separate fields. Only `vars` and `count`
//! are visible to templates, so a placeholder such as `%{scope}` is never
//! filled from the `scope` option.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;

use crate::types::Value;

/// Interpolation variables: name to value.
pub type Vars = HashMap<String, Value>;

/// Callback computing a default from the missing key and the call's options.
pub type DefaultFn = Arc<dyn Fn(&str, &TranslateOptions) -> String + Send + Sync>;

/// What to return when a key does not resolve.
///
/// # Example
///
/// ```
/// use polyglot::DefaultValue;
///
/// // Try `also_no`, then `in.default`, then give up with a literal.
/// let default = DefaultValue::chain([
///     DefaultValue::key("also_no"),
///     DefaultValue::key("in.default"),
///     DefaultValue::literal("Nothing"),
/// ]);
/// assert!(matches!(default, DefaultValue::Chain(ref items) if items.len() == 3));
/// ```
#[derive(Clone)]
pub enum DefaultValue {
    /// Returned verbatim.
    Literal(String),
    /// Another key, resolved with the same scope, separator and variables.
    /// A key starting with the separator ignores the scope.
    Key(String),
    /// Alternatives tried in order; the first that resolves wins.
    Chain(Vec<DefaultValue>),
    /// Computed from the missing key and the call's options.
    Computed(DefaultFn),
}

impl DefaultValue {
    pub fn literal(text: impl Into<String>) -> Self {
        DefaultValue::Literal(text.into())
    }

    pub fn key(key: impl Into<String>) -> Self {
        DefaultValue::Key(key.into())
    }

    pub fn chain(items: impl IntoIterator<Item = DefaultValue>) -> Self {
        DefaultValue::Chain(items.into_iter().collect())
    }

    /// Wrap a callback. It receives the key as passed to the lookup and the
    /// options without their default.
    pub fn computed(f: impl Fn(&str, &TranslateOptions) -> String + Send + Sync + 'static) -> Self {
        DefaultValue::Computed(Arc::new(f))
    }
}

impl Debug for DefaultValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DefaultValue::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            DefaultValue::Key(key) => f.debug_tuple("Key").field(key).finish(),
            DefaultValue::Chain(items) => f.debug_tuple("Chain").field(items).finish(),
            DefaultValue::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Options for a single lookup.
///
/// # Example
///
/// ```
/// use polyglot::{TranslateOptions, DefaultValue, vars};
///
/// let options = TranslateOptions::builder()
///     .scope("in.another")
///     .default(DefaultValue::literal("Default"))
///     .vars(vars! { "name" => "Ann" })
///     .build();
/// assert_eq!(options.separator, ".");
/// assert_eq!(options.variable("name").as_deref(), Some("Ann"));
/// assert_eq!(options.variable("scope"), None);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct TranslateOptions {
    /// Path prepended to the key.
    #[builder(into)]
    pub scope: Option<String>,

    /// Separator between path segments in both key and scope.
    #[builder(into, default = ".".to_string())]
    pub separator: String,

    /// Fallback used when the key does not resolve.
    pub default: Option<DefaultValue>,

    /// Count for plural selection; also available to templates as `count`.
    pub count: Option<i64>,

    /// Locale overriding the one passed to the lookup.
    #[builder(into)]
    pub locale: Option<String>,

    /// Interpolation variables.
    #[builder(default)]
    pub vars: Vars,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        TranslateOptions::builder().build()
    }
}

impl TranslateOptions {
    /// Options with only a count set.
    pub fn with_count(count: i64) -> Self {
        TranslateOptions::builder().count(count).build()
    }

    /// Options with only a scope set.
    pub fn with_scope(scope: impl Into<String>) -> Self {
        TranslateOptions::builder().scope(scope).build()
    }

    /// Value of a template variable.
    ///
    /// Looks in `vars` first; `count` falls back to the count option.
    pub fn variable(&self, name: &str) -> Option<String> {
        if let Some(value) = self.vars.get(name) {
            return Some(value.to_string());
        }
        match (name, self.count) {
            ("count", Some(count)) => Some(count.to_string()),
            _ => None,
        }
    }

    /// A copy without the default, as handed to computed defaults.
    pub(crate) fn without_default(&self) -> Self {
        Self {
            default: None,
            ..self.clone()
        }
    }
}
