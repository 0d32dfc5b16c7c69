use similar::{Algorithm, ChangeTag, TextDiff};

use crate::application::dto::diff::{AlignedDiffKind, AlignedDiffLine};

/// Myers-aligned line diff. Unlike [`super::line_diff::compare_lines`] this
/// recognizes insertions and deletions instead of cascading them, at the
/// cost of emitting context rows for the unchanged lines.
pub fn compute_aligned_diff(old: &str, new: &str) -> Vec<AlignedDiffLine> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(old, new);

    let mut lines = Vec::new();
    let mut old_line = 0u32;
    let mut new_line = 0u32;
    for op in diff.ops() {
        for change in diff.iter_changes(op) {
            match change.tag() {
                ChangeTag::Delete => {
                    old_line += 1;
                    lines.push(AlignedDiffLine {
                        kind: AlignedDiffKind::Removed,
                        old_line_number: Some(old_line),
                        new_line_number: None,
                        content: change.to_string().trim_end().to_string(),
                    });
                }
                ChangeTag::Insert => {
                    new_line += 1;
                    lines.push(AlignedDiffLine {
                        kind: AlignedDiffKind::Added,
                        old_line_number: None,
                        new_line_number: Some(new_line),
                        content: change.to_string().trim_end().to_string(),
                    });
                }
                ChangeTag::Equal => {
                    old_line += 1;
                    new_line += 1;
                    lines.push(AlignedDiffLine {
                        kind: AlignedDiffKind::Context,
                        old_line_number: Some(old_line),
                        new_line_number: Some(new_line),
                        content: change.to_string().trim_end().to_string(),
                    });
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_an_insertion_without_cascading() {
        let lines = compute_aligned_diff("a\nb", "x\na\nb");
        let kinds: Vec<AlignedDiffKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AlignedDiffKind::Added,
                AlignedDiffKind::Context,
                AlignedDiffKind::Context,
            ]
        );
        assert_eq!(lines[0].content, "x");
        assert_eq!(lines[0].new_line_number, Some(1));
        assert_eq!(lines[0].old_line_number, None);
    }

    #[test]
    fn equal_inputs_are_all_context() {
        let lines = compute_aligned_diff("a\nb", "a\nb");
        assert!(lines.iter().all(|l| l.kind == AlignedDiffKind::Context));
    }

    #[test]
    fn a_replacement_shows_both_sides() {
        let lines = compute_aligned_diff("old line", "new line");
        let kinds: Vec<AlignedDiffKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![AlignedDiffKind::Removed, AlignedDiffKind::Added]);
        assert_eq!(lines[0].old_line_number, Some(1));
        assert_eq!(lines[1].new_line_number, Some(1));
    }
}
