//! Plural variant selection.
//!
//! A count is mapped to a [`PluralKey`] using CLDR cardinal rules from
//! ICU4X, folded onto the small key space locale files use: `0`, `1`, `2`
//! and the generic `n` bucket. Zero always gets its own exact key so files
//! can say "no users" regardless of the language's CLDR rules.
//!
//! Plural rules are cached per thread per language to avoid re-creating
//! `PluralRules` instances on every call.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::types::{PluralForms, PluralKey};

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "cs", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl",
    "pl", "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
///
/// Returns the canonical `&'static str` for the language, or `"en"` for
/// unrecognized codes. English rules give the plain `0`/`1`/`n` split.
fn normalize_lang(lang: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == lang)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "cs" => locale!("cs"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("locale should be supported")
}

/// Fold a CLDR category onto a locale-file plural key.
fn key_for_category(category: PluralCategory) -> PluralKey {
    match category {
        PluralCategory::Zero => PluralKey::Exact(0),
        PluralCategory::One => PluralKey::Exact(1),
        PluralCategory::Two | PluralCategory::Few => PluralKey::Exact(2),
        PluralCategory::Many | PluralCategory::Other => PluralKey::Other,
    }
}

/// Get the plural key for a count in a given language.
///
/// # Examples
///
/// ```
/// use polyglot::{plural_key, PluralKey};
///
/// assert_eq!(plural_key("en", 0), PluralKey::Exact(0));
/// assert_eq!(plural_key("en", 1), PluralKey::Exact(1));
/// assert_eq!(plural_key("en", 2), PluralKey::Other);
///
/// assert_eq!(plural_key("ru", 21), PluralKey::Exact(1));
/// assert_eq!(plural_key("ru", 3), PluralKey::Exact(2));
/// assert_eq!(plural_key("ru", 5), PluralKey::Other);
/// ```
pub fn plural_key(lang: &str, n: i64) -> PluralKey {
    if n == 0 {
        return PluralKey::Exact(0);
    }
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return key_for_category(entry.1.category_for(n));
        }
        let rules = build_rules(lang);
        let key = key_for_category(rules.category_for(n));
        cache.push((lang, rules));
        key
    })
}

/// Pick the template for `count`.
///
/// The exact key wins; otherwise the generic `n` bucket is used. Returns
/// `None` when neither exists.
pub fn select<'a>(forms: &'a PluralForms, lang: &str, count: i64) -> Option<&'a str> {
    forms
        .get(plural_key(lang, count))
        .or_else(|| forms.get(PluralKey::Other))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> PluralForms {
        [
            (PluralKey::Exact(0), "no users"),
            (PluralKey::Exact(1), "1 user"),
            (PluralKey::Other, "%{count} users"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn exact_keys_take_precedence() {
        let forms = users();
        assert_eq!(select(&forms, "en", 0), Some("no users"));
        assert_eq!(select(&forms, "en", 1), Some("1 user"));
    }

    #[test]
    fn counts_without_exact_key_use_generic_bucket() {
        let forms = users();
        assert_eq!(select(&forms, "en", 2), Some("%{count} users"));
        assert_eq!(select(&forms, "ru", 3), Some("%{count} users"));
        assert_eq!(select(&forms, "xx", 42), Some("%{count} users"));
    }

    #[test]
    fn missing_generic_bucket_selects_nothing() {
        let forms: PluralForms = [(PluralKey::Exact(1), "one")].into_iter().collect();
        assert_eq!(select(&forms, "en", 5), None);
    }

    #[test]
    fn russian_few_maps_to_two() {
        let forms: PluralForms = [
            (PluralKey::Exact(1), "Один"),
            (PluralKey::Exact(2), "Несколько"),
            (PluralKey::Other, "Много"),
        ]
        .into_iter()
        .collect();
        assert_eq!(select(&forms, "ru", 22), Some("Несколько"));
        assert_eq!(select(&forms, "ru", 11), Some("Много"));
        assert_eq!(select(&forms, "ru", 5), Some("Много"));
    }
}
