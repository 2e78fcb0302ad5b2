//! API handlers.
//!
//! Request bodies are taken as raw strings and decoded with
//! `serde_path_to_error`, so a malformed field is reported by its JSON path.
//! Step and side counts are capped by the server settings, and generation
//! runs on the blocking pool.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use cyclograph_camtools::ToolpathOptions;
use cyclograph_core::{
    shapes::POLYGON_TAG, CyclographError, Design, DesignSpec, GearSpec, Pattern, PatternGenerator,
    Shape,
};
use cyclograph_export::{Exporter, GearOutline, OutputFormat};
use cyclograph_settings::ServerSettings;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::server::{ApiError, AppState};

pub fn app_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate))
        .route("/api/gear/create", post(create_gear))
        .route("/api/design/modify", put(modify_design))
        .route("/api/export/svg", post(export_svg))
        .route("/api/export/png", post(export_png))
        .route("/api/export/gcode", post(export_gcode))
        .with_state(state)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        warn!("Error parsing request body: {err}");
        CyclographError::invalid_input(format!("Error parsing request body: {err}")).into()
    })
}

fn check_gear_limits(field: &str, gear: &GearSpec, limits: &ServerSettings) -> Result<(), ApiError> {
    match gear.sides {
        Some(sides) if gear.shape == POLYGON_TAG && sides > limits.max_sides => {
            Err(CyclographError::invalid_input(format!(
                "{field}.sides must be <= {}, got {sides}",
                limits.max_sides
            ))
            .into())
        }
        _ => Ok(()),
    }
}

fn check_design_limits(spec: &DesignSpec, limits: &ServerSettings) -> Result<(), ApiError> {
    check_gear_limits("fixedGear", &spec.fixed_gear, limits)?;
    check_gear_limits("movingGear", &spec.moving_gear, limits)?;
    if spec.steps > limits.max_steps {
        return Err(CyclographError::invalid_input(format!(
            "steps must be <= {}, got {}",
            limits.max_steps, spec.steps
        ))
        .into());
    }
    Ok(())
}

/// Run CPU-bound work off the async workers.
async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|err| {
        error!("Generation task failed: {err}");
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal server error occurred",
        )
    })?
}

fn pattern_for(spec: DesignSpec) -> Result<Pattern, ApiError> {
    let design = Design::try_from(spec)?;
    Ok(PatternGenerator::new(&design).generate()?)
}

pub async fn health() -> &'static str {
    "cyclograph up and running"
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<Pattern>, ApiError> {
    let spec: DesignSpec = parse_body(&body)?;
    check_design_limits(&spec, &state.config.server)?;
    let pattern = run_blocking(move || pattern_for(spec)).await?;
    info!(points = pattern.len(), "Generated pattern");
    Ok(Json(pattern))
}

pub async fn create_gear(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<GearOutline>, ApiError> {
    let spec: GearSpec = parse_body(&body)?;
    check_gear_limits("gear", &spec, &state.config.server)?;
    let shape = Shape::try_from(spec)?;
    Ok(Json(GearOutline::from(&shape)))
}

#[derive(Deserialize)]
struct ModifyDesignRequest {
    id: Option<serde_json::Value>,
    #[serde(flatten)]
    design: DesignSpec,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModifiedDesign {
    pub id: serde_json::Value,
    pub design: Design,
}

pub async fn modify_design(body: String) -> Result<Json<ModifiedDesign>, ApiError> {
    let request: ModifyDesignRequest = parse_body(&body)?;
    let id = request
        .id
        .filter(|id| !id.is_null())
        .ok_or_else(|| CyclographError::invalid_input("Design ID is required"))?;
    let design = Design::try_from(request.design)?;
    Ok(Json(ModifiedDesign { id, design }))
}

#[derive(Deserialize)]
struct ExportRequest {
    #[serde(flatten)]
    design: DesignSpec,
    #[serde(default)]
    toolpath: Option<ToolpathOptions>,
}

fn attachment(format: OutputFormat, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, format.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", format.file_name()),
            ),
        ],
        bytes,
    )
        .into_response()
}

async fn export_with(
    state: &AppState,
    exporter: Exporter,
    spec: DesignSpec,
    format: OutputFormat,
) -> Result<Response, ApiError> {
    check_design_limits(&spec, &state.config.server)?;
    let bytes = run_blocking(move || {
        let pattern = pattern_for(spec)?;
        Ok(exporter.export(&pattern, format)?)
    })
    .await?;
    info!(bytes = bytes.len(), "Exported {format}");
    Ok(attachment(format, bytes))
}

pub async fn export_svg(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Response, ApiError> {
    let spec: DesignSpec = parse_body(&body)?;
    export_with(&state, state.exporter(), spec, OutputFormat::Svg).await
}

pub async fn export_png(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Response, ApiError> {
    let spec: DesignSpec = parse_body(&body)?;
    export_with(&state, state.exporter(), spec, OutputFormat::Png).await
}

pub async fn export_gcode(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Response, ApiError> {
    let request: ExportRequest = parse_body(&body)?;
    let mut exporter = state.exporter();
    if let Some(toolpath) = request.toolpath {
        exporter.toolpath = toolpath;
    }
    export_with(&state, exporter, request.design, OutputFormat::Gcode).await
}
