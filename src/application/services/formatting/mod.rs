//! Source reformatting passes.
//!
//! Only the JSON path parses its input. The script, stylesheet and markup
//! passes are punctuation-driven re-indenters: they track brace or tag
//! nesting without tokenizing the language, so text inside string literals,
//! comments or regular expressions that contains `{`, `}`, `;`, `<` or `>`
//! will be mis-indented. That trade-off is intentional — the passes are
//! total over arbitrary input and finish in one scan.

mod json;
mod markup;
mod script;
mod stylesheet;

pub use json::format_json;
pub use markup::format_markup;
pub use script::format_script;
pub use stylesheet::format_stylesheet;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The input claimed to be structured (JSON) but did not parse.
    #[error("JSON formatting error: {0}")]
    Parse(String),
    /// The external SQL formatter, or an internal serializer, rejected the
    /// input. The underlying message is carried verbatim.
    #[error("SQL formatting error: {0}")]
    External(String),
}

/// A run of blank lines, including any indentation they carry.
static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern"));

/// Any run of whitespace.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINE_RUN.replace_all(text, "\n").into_owned()
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Re-indents line by line, driven by brace punctuation alone. A line
/// containing `}` drops one level before it is indented; a line containing
/// `{` raises the level for the lines after it. The level never goes below
/// zero.
fn reindent_braces(text: &str, indent_unit: &str) -> String {
    let mut depth: i32 = 0;
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed.contains('}') {
            depth -= 1;
        }
        let level = depth.max(0) as usize;
        lines.push(format!("{}{}", indent_unit.repeat(level), trimmed));
        if trimmed.contains('{') {
            depth += 1;
        }
    }
    lines.join("\n")
}
