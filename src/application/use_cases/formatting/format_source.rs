use crate::application::dto::format::{FormatRequest, SourceLanguage};
use crate::application::ports::sql_formatter::{
    SqlDialect, SqlFormatOptions, SqlStatementFormatter,
};
use crate::application::services::formatting::{
    FormatError, format_json, format_markup, format_script, format_stylesheet,
};

/// Routes a format request to the strategy its declared language calls for.
/// SQL-family input goes through the external formatter port; everything
/// else is handled in-process.
pub struct FormatSource<'a> {
    pub sql: &'a dyn SqlStatementFormatter,
}

impl FormatSource<'_> {
    pub fn execute(&self, request: &FormatRequest) -> Result<String, FormatError> {
        match request.language {
            SourceLanguage::Json => format_json(&request.content, request.indent),
            SourceLanguage::Javascript | SourceLanguage::Typescript => {
                Ok(format_script(&request.content, request.indent))
            }
            SourceLanguage::Css => Ok(format_stylesheet(&request.content, request.indent)),
            SourceLanguage::Html => Ok(format_markup(&request.content, request.indent)),
            SourceLanguage::Sql => self.format_sql(request, SqlDialect::Generic),
            SourceLanguage::Mysql => self.format_sql(request, SqlDialect::MySql),
            SourceLanguage::Postgresql => self.format_sql(request, SqlDialect::PostgreSql),
            SourceLanguage::Sqlite => self.format_sql(request, SqlDialect::Sqlite),
        }
    }

    fn format_sql(
        &self,
        request: &FormatRequest,
        dialect: SqlDialect,
    ) -> Result<String, FormatError> {
        let options = SqlFormatOptions {
            dialect,
            tab_width: request.indent,
            uppercase: request.uppercase,
            lines_between_queries: request.lines_between_queries,
        };
        self.sql
            .format(&request.content, &options)
            .map_err(|err| FormatError::External(err.to_string()))
    }
}
