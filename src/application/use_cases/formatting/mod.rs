pub mod format_source;
