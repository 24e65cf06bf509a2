//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use farm_i18n::{Coverage, Language};

/// Format the supported languages with their key counts.
pub fn format_languages_table(rows: &[(Language, usize)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Language", "Native name", "Keys"]);

    for (language, keys) in rows {
        table.add_row(vec![
            language.code().to_string(),
            language.name().to_string(),
            language.native_name().to_string(),
            keys.to_string(),
        ]);
    }

    table
}

/// Format coverage data as a table.
pub fn format_coverage_table(coverage: &[Coverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            format!("{} ({})", lang.language.code(), lang.language.name()),
            format!("{}/{}", lang.translated, lang.total),
            lang.missing.len().to_string(),
        ]);
    }

    table
}
