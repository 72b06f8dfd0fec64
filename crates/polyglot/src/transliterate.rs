use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decompose `text` and drop combining marks, leaving base letters.
///
/// # Example
///
/// ```
/// use polyglot::transliterate;
///
/// assert_eq!(transliterate("café"), "cafe");
/// assert_eq!(transliterate("Ångström"), "Angstrom");
/// ```
pub fn transliterate(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
