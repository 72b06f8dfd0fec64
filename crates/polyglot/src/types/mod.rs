mod entry;
mod locale_tag;
mod translation;
mod value;

pub use entry::{Entry, Leaf, PluralForms, PluralKey, Tree};
pub use locale_tag::{InvalidLocale, LocaleTag};
pub use translation::Translation;
pub use value::Value;
