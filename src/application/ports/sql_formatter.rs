/// Named SQL grammar variant, passed through to the formatting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Generic,
    MySql,
    PostgreSql,
    Sqlite,
}

#[derive(Debug, Clone, Copy)]
pub struct SqlFormatOptions {
    pub dialect: SqlDialect,
    /// Spaces per indentation level.
    pub tab_width: usize,
    /// Uppercase reserved keywords.
    pub uppercase: bool,
    /// Blank lines between consecutive statements.
    pub lines_between_queries: u8,
}

/// Seam for the external SQL-aware formatter. SQL grammar handling is not
/// this crate's business; the adapter owns it and may reject input.
pub trait SqlStatementFormatter: Send + Sync {
    fn format(&self, sql: &str, options: &SqlFormatOptions) -> anyhow::Result<String>;
}
