use crate::application::dto::diff::{DiffKind, DiffLine};

/// Positional line differ: walks both inputs index by index and reports
/// every position where they disagree. No alignment is attempted, so one
/// inserted line shifts everything after it into `modified` entries. Cheap,
/// order-preserving, and exactly what the compare widget renders; the
/// aligned differ exists for callers who want insertions recognized.
pub fn compare_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let mut differences = Vec::new();
    for index in 0..old_lines.len().max(new_lines.len()) {
        let line = (index + 1) as u32;
        match (old_lines.get(index), new_lines.get(index)) {
            (None, Some(added)) => differences.push(DiffLine {
                line,
                kind: DiffKind::Added,
                content: (*added).to_string(),
                original_content: None,
            }),
            (Some(removed), None) => differences.push(DiffLine {
                line,
                kind: DiffKind::Removed,
                content: (*removed).to_string(),
                original_content: None,
            }),
            (Some(before), Some(after)) if before != after => differences.push(DiffLine {
                line,
                kind: DiffKind::Modified,
                content: (*after).to_string(),
                original_content: Some((*before).to_string()),
            }),
            _ => {}
        }
    }
    differences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_produce_no_differences() {
        assert!(compare_lines("x\ny\nz", "x\ny\nz").is_empty());
        assert!(compare_lines("", "").is_empty());
    }

    #[test]
    fn a_trailing_line_only_in_the_old_input_is_removed() {
        let differences = compare_lines("a\nb", "a");
        assert_eq!(
            differences,
            vec![DiffLine {
                line: 2,
                kind: DiffKind::Removed,
                content: "b".to_string(),
                original_content: None,
            }]
        );
    }

    #[test]
    fn reports_modified_and_added_positions_in_order() {
        let differences = compare_lines("x\ny\nz", "x\nY\nz\nw");
        assert_eq!(
            differences,
            vec![
                DiffLine {
                    line: 2,
                    kind: DiffKind::Modified,
                    content: "Y".to_string(),
                    original_content: Some("y".to_string()),
                },
                DiffLine {
                    line: 4,
                    kind: DiffKind::Added,
                    content: "w".to_string(),
                    original_content: None,
                },
            ]
        );
    }

    #[test]
    fn an_insertion_cascades_into_modified_entries() {
        // Positional by design: the shifted tail registers as modified.
        let differences = compare_lines("a\nb", "x\na\nb");
        assert_eq!(differences.len(), 3);
        assert_eq!(differences[0].kind, DiffKind::Modified);
        assert_eq!(differences[1].kind, DiffKind::Modified);
        assert_eq!(differences[2].kind, DiffKind::Added);
    }

    #[test]
    fn never_emits_more_entries_than_the_longer_input_has_lines() {
        let old = "a\nb\nc";
        let new = "d\ne";
        let differences = compare_lines(old, new);
        assert!(differences.len() <= 3);
    }

    #[test]
    fn an_empty_side_differs_from_a_non_empty_one() {
        let differences = compare_lines("", "a");
        assert_eq!(differences.len(), 1);
        assert_eq!(differences[0].kind, DiffKind::Modified);
        assert_eq!(differences[0].original_content.as_deref(), Some(""));
    }
}
