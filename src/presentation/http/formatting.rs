use axum::http::StatusCode;
use axum::{Json, extract::State};

use crate::application::dto::format::{FormatRequest, FormatResponse};
use crate::application::services::formatting::FormatError;
use crate::application::use_cases::formatting::format_source::FormatSource;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::{ErrorResponse, unprocessable};

#[utoipa::path(post, path = "/api/format", tag = "Tools", request_body = FormatRequest,
    responses(
        (status = 200, body = FormatResponse),
        (status = 422, description = "Input rejected", body = ErrorResponse)
    ))]
pub async fn format_source(
    State(ctx): State<AppContext>,
    Json(req): Json<FormatRequest>,
) -> Result<Json<FormatResponse>, (StatusCode, Json<ErrorResponse>)> {
    if req.indent == 0 {
        return Err(unprocessable("indent must be a positive integer"));
    }

    let sql = ctx.sql_formatter();
    let uc = FormatSource { sql: sql.as_ref() };
    match uc.execute(&req) {
        Ok(formatted) => Ok(Json(FormatResponse { formatted })),
        Err(err) => {
            if let FormatError::External(_) = &err {
                tracing::warn!(language = ?req.language, error = %err, "sql_format_failed");
            }
            Err(unprocessable(err.to_string()))
        }
    }
}
