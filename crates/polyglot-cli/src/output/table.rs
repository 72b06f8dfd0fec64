//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale tag (e.g., "ru", "de-CH").
    pub locale: String,
    /// Number of source keys the locale defines.
    pub translated: usize,
    /// Source keys the locale lacks.
    pub missing: Vec<String>,
}

/// Format coverage data as a table.
pub fn format_coverage_table(source_count: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Missing"]);

    for locale in coverage {
        table.add_row(vec![
            locale.locale.clone(),
            format!("{}/{}", locale.translated, source_count),
            locale.missing.len().to_string(),
        ]);
    }

    table
}

/// Format locale tags with the number of keys each defines.
pub fn format_locales_table(rows: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(vec!["Locale", "Keys"]);
    for (locale, keys) in rows {
        table.add_row(vec![locale.clone(), keys.to_string()]);
    }
    table
}
