use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::conversions::{
    HslColor, RgbColor, TemperatureReadings, TemperatureUnit,
};
use crate::application::services::conversions::color::{hex_to_rgb, rgb_to_hex, rgb_to_hsl};
use crate::application::services::conversions::temperature::readings_from;
use crate::presentation::http::{ErrorResponse, unprocessable};

#[derive(Debug, Deserialize, ToSchema)]
pub struct TemperatureRequest {
    pub value: f64,
    pub unit: TemperatureUnit,
}

#[utoipa::path(post, path = "/api/convert/temperature", tag = "Conversions",
    request_body = TemperatureRequest,
    responses((status = 200, body = TemperatureReadings)))]
pub async fn convert_temperature(Json(req): Json<TemperatureRequest>) -> Json<TemperatureReadings> {
    Json(readings_from(req.value, req.unit))
}

/// Either `hex` or `rgb` must be provided; `hex` wins when both are.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorRequest {
    pub hex: Option<String>,
    pub rgb: Option<RgbColor>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ColorResponse {
    pub hex: String,
    pub rgb: RgbColor,
    pub hsl: HslColor,
}

#[utoipa::path(post, path = "/api/convert/color", tag = "Conversions",
    request_body = ColorRequest,
    responses(
        (status = 200, body = ColorResponse),
        (status = 422, description = "Malformed or missing color", body = ErrorResponse)
    ))]
pub async fn convert_color(
    Json(req): Json<ColorRequest>,
) -> Result<Json<ColorResponse>, (StatusCode, Json<ErrorResponse>)> {
    let rgb = match (req.hex.as_deref(), req.rgb) {
        (Some(hex), _) => hex_to_rgb(hex).ok_or_else(|| unprocessable("invalid hex color"))?,
        (None, Some(rgb)) => rgb,
        (None, None) => return Err(unprocessable("hex or rgb is required")),
    };

    Ok(Json(ColorResponse {
        hex: rgb_to_hex(rgb),
        rgb,
        hsl: rgb_to_hsl(rgb),
    }))
}
