use super::{collapse_blank_lines, collapse_whitespace, reindent_braces};

/// Heuristic CSS re-indenter. Whitespace runs are flattened to single
/// spaces before the punctuation breaks, so pre-formatted input is reflowed
/// rather than stacked. Rules are separated by the newline the closing brace
/// carries. Total over arbitrary input; never fails.
pub fn format_stylesheet(input: &str, indent: usize) -> String {
    let unit = " ".repeat(indent);

    let flattened = collapse_whitespace(input);
    let broken = flattened
        .replace('{', " {\n")
        .replace('}', "\n}\n")
        .replace(';', ";\n");
    let collapsed = collapse_blank_lines(&broken);

    reindent_braces(&collapsed, &unit)
}
