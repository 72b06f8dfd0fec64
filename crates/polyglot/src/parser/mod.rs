//! Template and format-string parsers.
//!
//! This module parses translation templates (for interpolation) and
//! strftime-style format strings (for localization) into ASTs that the
//! resolver and formatter walk.

pub mod ast;
mod format;
mod template;

pub use ast::*;
pub use format::parse_date_format;
pub use template::parse_template;
