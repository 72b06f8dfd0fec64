mod backend;
pub mod error;
pub mod format;
#[cfg(feature = "global-backend")]
mod global;
pub mod parser;
pub mod resolve;
pub mod store;
mod transliterate;
pub mod types;

pub use backend::Backend;
pub use error::{LoadError, MissingTranslationData, compute_suggestions};
pub use format::{FormatKind, LocaleFormatter, Localizable};
#[cfg(feature = "global-backend")]
pub use global::{
    available_locales, l, locale, push_load_path, reload, set_load_path, set_locale, t,
    with_backend, with_backend_mut,
};
pub use resolve::{
    DefaultFn, DefaultValue, TranslateOptions, Vars, interpolate, interpolate_vars, plural_key,
    select, split_key,
};
pub use store::LocaleStore;
pub use transliterate::transliterate;
pub use types::{Entry, InvalidLocale, Leaf, LocaleTag, PluralForms, PluralKey, Translation, Tree, Value};

/// Creates a `HashMap<String, Value>` of interpolation variables.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use polyglot::{vars, Value};
///
/// let v = vars! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
