use super::{collapse_blank_lines, reindent_braces};

/// Heuristic JavaScript/TypeScript re-indenter. Breaks after `{`, before
/// `}` and after `;`, drops blank lines, then re-indents by brace depth.
/// Total over arbitrary input and deterministic; never fails.
pub fn format_script(input: &str, indent: usize) -> String {
    let unit = " ".repeat(indent);

    let broken = input
        .replace('{', "{\n")
        .replace('}', "\n}")
        .replace(';', ";\n");
    let collapsed = collapse_blank_lines(&broken);

    reindent_braces(&collapsed, &unit)
}
