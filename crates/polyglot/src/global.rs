//! Process-wide backend for the `global-backend` feature.
//!
//! Holds one shared [`Backend`] and a current locale, so callers can use
//! [`t`] and [`l`] without threading a backend through their code.

use std::sync::{LazyLock, RwLock};

use crate::error::{LoadError, MissingTranslationData};
use crate::format::Localizable;
use crate::resolve::TranslateOptions;
use crate::types::{LocaleTag, Translation};
use crate::Backend;

struct GlobalState {
    backend: Backend,
    locale: String,
}

static GLOBAL: LazyLock<RwLock<GlobalState>> = LazyLock::new(|| {
    let backend = Backend::builder().build();
    let locale = backend.default_locale().to_string();
    RwLock::new(GlobalState { backend, locale })
});

/// Provides read access to the global backend.
pub fn with_backend<T>(f: impl FnOnce(&Backend) -> T) -> T {
    let guard = GLOBAL.read().expect("global backend lock poisoned");
    f(&guard.backend)
}

/// Provides write access to the global backend.
pub fn with_backend_mut<T>(f: impl FnOnce(&mut Backend) -> T) -> T {
    let mut guard = GLOBAL.write().expect("global backend lock poisoned");
    f(&mut guard.backend)
}

/// Sets the locale used by [`t`] and [`l`].
pub fn set_locale(locale: impl Into<String>) {
    GLOBAL.write().expect("global backend lock poisoned").locale = locale.into();
}

/// Returns the locale used by [`t`] and [`l`].
pub fn locale() -> String {
    GLOBAL.read().expect("global backend lock poisoned").locale.clone()
}

/// Translates `key` in the current locale.
pub fn t(key: &str, options: &TranslateOptions) -> Result<Translation, MissingTranslationData> {
    let guard = GLOBAL.read().expect("global backend lock poisoned");
    guard.backend.translate(&guard.locale, key, options)
}

/// Localizes `object` in the current locale.
pub fn l(
    object: impl Into<Localizable>,
    format: Option<&str>,
) -> Result<String, MissingTranslationData> {
    let guard = GLOBAL.read().expect("global backend lock poisoned");
    guard.backend.localize(&guard.locale, object, format)
}

/// Replaces the global load path. Call [`reload`] to apply it.
pub fn set_load_path(load_path: Vec<String>) {
    with_backend_mut(|backend| backend.set_load_path(load_path));
}

/// Appends to the global load path. Call [`reload`] to apply it.
pub fn push_load_path(entry: impl Into<String>) {
    with_backend_mut(|backend| backend.push_load_path(entry));
}

/// Reloads the global backend from its load path.
pub fn reload() -> Result<bool, LoadError> {
    with_backend(Backend::reload)
}

/// Locales loaded into the global backend.
pub fn available_locales() -> Vec<LocaleTag> {
    with_backend(Backend::available_locales)
}
