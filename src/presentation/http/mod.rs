pub mod compare;
pub mod conversions;
pub mod formatting;
mod openapi;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use http::HeaderValue;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn unprocessable(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub fn router(ctx: AppContext) -> Router {
    let cors = match ctx
        .cfg
        .cors_allowed_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/format", post(formatting::format_source))
        .route("/api/compare", post(compare::compare_texts))
        .route("/api/compare/aligned", post(compare::compare_texts_aligned))
        .route(
            "/api/convert/temperature",
            post(conversions::convert_temperature),
        )
        .route("/api/convert/color", post(conversions::convert_color))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/health", tag = "Health", responses((status = 200)))]
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
