//! Translation resolution.
//!
//! This module turns a lookup request into a node of a locale tree: it
//! splits keys and scopes into paths, walks the tree, picks plural variants
//! by count and substitutes variables into the resulting template.

mod interpolate;
mod options;
mod plural;
mod resolver;

pub use interpolate::{interpolate, interpolate_vars};
pub use options::{DefaultFn, DefaultValue, TranslateOptions, Vars};
pub use plural::{plural_key, select};
pub use resolver::{Node, Unresolved, split_key, walk};
