use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::diff::{AlignedDiffLine, DiffLine};
use crate::application::services::diff::aligned_diff::compute_aligned_diff;
use crate::application::services::diff::line_diff::compare_lines;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CompareRequest {
    pub old: String,
    pub new: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompareResponse {
    pub differences: Vec<DiffLine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AlignedCompareResponse {
    pub lines: Vec<AlignedDiffLine>,
}

/// Positional comparison: one entry per line index where the inputs
/// disagree. An empty list means the inputs are identical.
#[utoipa::path(post, path = "/api/compare", tag = "Tools", request_body = CompareRequest,
    responses((status = 200, body = CompareResponse)))]
pub async fn compare_texts(Json(req): Json<CompareRequest>) -> Json<CompareResponse> {
    Json(CompareResponse {
        differences: compare_lines(&req.old, &req.new),
    })
}

/// Myers-aligned comparison, for callers that want insertions and deletions
/// recognized rather than cascading positionally.
#[utoipa::path(post, path = "/api/compare/aligned", tag = "Tools", request_body = CompareRequest,
    responses((status = 200, body = AlignedCompareResponse)))]
pub async fn compare_texts_aligned(Json(req): Json<CompareRequest>) -> Json<AlignedCompareResponse> {
    Json(AlignedCompareResponse {
        lines: compute_aligned_diff(&req.old, &req.new),
    })
}
