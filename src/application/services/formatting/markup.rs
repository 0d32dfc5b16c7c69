use super::collapse_blank_lines;

/// Heuristic HTML re-indenter. Every tag boundary gets its own line, blank
/// lines are dropped, and indentation follows tag nesting: a line opening
/// with `</` closes a level before it is indented, a line opening any other
/// non-self-closing tag opens one after. Void elements written without `/>`
/// (`<br>`, `<img>`) are treated as openers — a documented limitation of not
/// parsing the grammar. Total over arbitrary input; never fails.
pub fn format_markup(input: &str, indent: usize) -> String {
    let unit = " ".repeat(indent);

    let broken = input.replace('>', ">\n").replace('<', "\n<");
    let collapsed = collapse_blank_lines(&broken);

    let mut depth: i32 = 0;
    let mut lines = Vec::new();
    for line in collapsed.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with("</") {
            depth -= 1;
        }
        let level = depth.max(0) as usize;
        lines.push(format!("{}{}", unit.repeat(level), trimmed));
        if trimmed.starts_with('<') && !trimmed.starts_with("</") && !trimmed.ends_with("/>") {
            depth += 1;
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_by_tag_nesting() {
        let formatted = format_markup("<div><p>hi</p></div>", 2);
        assert_eq!(formatted, "<div>\n  <p>\n    hi\n  </p>\n</div>");
    }

    #[test]
    fn self_closing_tags_do_not_open_a_level() {
        let formatted = format_markup("<div><img/></div>", 2);
        assert_eq!(formatted, "<div>\n  <img/>\n</div>");
    }

    #[test]
    fn text_nodes_do_not_change_the_level() {
        let formatted = format_markup("<ul><li>one</li><li>two</li></ul>", 2);
        assert_eq!(
            formatted,
            "<ul>\n  <li>\n    one\n  </li>\n  <li>\n    two\n  </li>\n</ul>"
        );
    }

    #[test]
    fn drops_blank_lines_from_the_source() {
        let formatted = format_markup("<div>\n\n\n<span>x</span></div>", 2);
        assert_eq!(formatted, "<div>\n  <span>\n    x\n  </span>\n</div>");
    }

    #[test]
    fn repeated_calls_return_identical_output() {
        let source = "<html><body><h1>Title</h1><p>Text</p></body></html>";
        assert_eq!(format_markup(source, 2), format_markup(source, 2));
    }
}
