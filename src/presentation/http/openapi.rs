use utoipa::OpenApi;

use crate::application::dto::conversions::{
    HslColor, RgbColor, TemperatureReadings, TemperatureUnit,
};
use crate::application::dto::diff::{AlignedDiffKind, AlignedDiffLine, DiffKind, DiffLine};
use crate::application::dto::format::{FormatRequest, FormatResponse, SourceLanguage};
use crate::presentation::http::ErrorResponse;
use crate::presentation::http::compare::{
    AlignedCompareResponse, CompareRequest, CompareResponse,
};
use crate::presentation::http::conversions::{ColorRequest, ColorResponse, TemperatureRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::health,
        super::formatting::format_source,
        super::compare::compare_texts,
        super::compare::compare_texts_aligned,
        super::conversions::convert_temperature,
        super::conversions::convert_color,
    ),
    components(schemas(
        FormatRequest,
        FormatResponse,
        SourceLanguage,
        CompareRequest,
        CompareResponse,
        AlignedCompareResponse,
        DiffKind,
        DiffLine,
        AlignedDiffKind,
        AlignedDiffLine,
        TemperatureRequest,
        TemperatureReadings,
        TemperatureUnit,
        ColorRequest,
        ColorResponse,
        RgbColor,
        HslColor,
        ErrorResponse,
    )),
    tags(
        (name = "Tools", description = "Formatting and comparison"),
        (name = "Conversions", description = "Unit and color conversion"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;
