use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Declared content type of the submitted source. Drives which formatting
/// strategy runs; nothing is sniffed from the text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    Sql,
    Mysql,
    Postgresql,
    Sqlite,
    Javascript,
    Typescript,
    Json,
    Html,
    Css,
}

fn default_indent() -> usize {
    2
}

fn default_lines_between_queries() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FormatRequest {
    pub content: String,
    pub language: SourceLanguage,
    /// Spaces per nesting level. Must be positive.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Uppercase SQL keywords. Ignored outside the SQL family.
    #[serde(default)]
    pub uppercase: bool,
    /// Blank lines between consecutive SQL statements. Ignored outside the
    /// SQL family.
    #[serde(default = "default_lines_between_queries")]
    pub lines_between_queries: u8,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormatResponse {
    pub formatted: String,
}
