use std::sync::Arc;

use crate::application::ports::sql_formatter::SqlStatementFormatter;
use crate::bootstrap::config::AppConfig;
use crate::infrastructure::sql::sqlformat_engine::SqlFormatEngine;

/// Shared state handed to the router. Requests are stateless, so this only
/// carries configuration and the SQL formatter port.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: AppConfig,
    sql_formatter: Arc<dyn SqlStatementFormatter>,
}

impl AppContext {
    pub fn new(cfg: AppConfig) -> Self {
        Self {
            cfg,
            sql_formatter: Arc::new(SqlFormatEngine),
        }
    }

    pub fn sql_formatter(&self) -> Arc<dyn SqlStatementFormatter> {
        self.sql_formatter.clone()
    }
}
