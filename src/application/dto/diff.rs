use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    Modified,
}

/// One disagreeing line position from the positional differ. Positions where
/// both inputs agree produce no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiffLine {
    /// 1-based line number.
    pub line: u32,
    pub kind: DiffKind,
    pub content: String,
    /// The old line, present only for `modified` entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlignedDiffKind {
    Added,
    Removed,
    Context,
}

/// One row of the aligned (Myers) diff stream. Unlike [`DiffLine`], equal
/// lines appear as `context` rows so both numbering columns stay continuous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AlignedDiffLine {
    pub kind: AlignedDiffKind,
    pub old_line_number: Option<u32>,
    pub new_line_number: Option<u32>,
    pub content: String,
}
