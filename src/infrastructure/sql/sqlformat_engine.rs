use sqlformat::{FormatOptions, Indent, QueryParams};

use crate::application::ports::sql_formatter::{SqlFormatOptions, SqlStatementFormatter};

/// Binds the SQL formatter port to the `sqlformat` crate. The crate formats
/// the common dialects with a single grammar, so `options.dialect` does not
/// change the output today; it stays in the contract so a dialect-aware
/// engine can replace this adapter without touching callers.
pub struct SqlFormatEngine;

impl SqlStatementFormatter for SqlFormatEngine {
    fn format(&self, sql: &str, options: &SqlFormatOptions) -> anyhow::Result<String> {
        let tab_width = options.tab_width.min(u8::MAX as usize) as u8;
        let formatted = sqlformat::format(
            sql,
            &QueryParams::None,
            FormatOptions {
                indent: Indent::Spaces(tab_width),
                uppercase: options.uppercase,
                lines_between_queries: options.lines_between_queries,
            },
        );
        Ok(formatted)
    }
}
