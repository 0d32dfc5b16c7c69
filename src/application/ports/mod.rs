pub mod sql_formatter;
