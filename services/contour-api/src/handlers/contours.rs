//! Contour query handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use contour_common::{BoundingBox, ContourError, VariableFamily};
use isoline::{contour_grid, ContourFeatureCollection};

use crate::sampler::{build_grid, sample_points};
use crate::state::AppState;

/// Query parameters for the contour endpoint.
#[derive(Debug, Deserialize)]
pub struct ContourQueryParams {
    /// Forecast hour offset. Defaults to 0.
    pub hour: Option<u32>,

    /// Bounding box as "west,south,east,north". Required.
    pub bbox: Option<String>,
}

/// GET /contours/:model/:variable
pub async fn contours_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((model, variable)): Path<(String, String)>,
    Query(params): Query<ContourQueryParams>,
) -> Response {
    match generate_contours(&state, &model, &variable, params).await {
        Ok(collection) => match serde_json::to_string(&collection) {
            Ok(json) => Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "application/geo+json")
                .header(header::CACHE_CONTROL, "max-age=300")
                .body(json.into())
                .unwrap(),
            Err(e) => {
                warn!("Failed to serialize contour response: {}", e);
                error_response(ContourError::ComputeError(
                    "failed to serialize response".to_string(),
                ))
            }
        },
        Err(err) => error_response(err),
    }
}

/// Run the full pipeline for one request: validate, sample, fetch, build
/// the grid, contour, emit features.
pub async fn generate_contours(
    state: &AppState,
    model: &str,
    variable: &str,
    params: ContourQueryParams,
) -> Result<ContourFeatureCollection, ContourError> {
    if !state.models.supports(model, variable) {
        return Err(ContourError::UnsupportedVariable {
            model: model.to_string(),
            variable: variable.to_string(),
        });
    }

    let bbox_str = params
        .bbox
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ContourError::MissingParameter("bbox".to_string()))?;
    let bbox = BoundingBox::from_query_string(bbox_str)?;

    let hour = params.hour.unwrap_or(0);
    if hour > state.config.max_forecast_hour {
        return Err(ContourError::InvalidParameter {
            param: "hour".to_string(),
            message: format!("must be at most {}", state.config.max_forecast_hour),
        });
    }

    let family = VariableFamily::classify(variable);
    let (points, bounds) = sample_points(&bbox, &state.config);

    info!(
        model,
        variable,
        hour,
        num_points = points.len(),
        "sampling forecast grid"
    );

    let responses = state
        .forecast
        .fetch_points(&points, variable, hour + 1)
        .await?;
    let grid = build_grid(&responses, hour, family, bounds, &state.config)?;

    let grid = if state.config.oversample > 1 {
        grid.resample(
            (grid.rows() - 1) * state.config.oversample + 1,
            (grid.cols() - 1) * state.config.oversample + 1,
        )
    } else {
        grid
    };

    let collection = contour_grid(&grid, family);
    debug!(
        num_features = collection.features.len(),
        "contour generation complete"
    );
    Ok(collection)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(err: ContourError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(error = %err, "contour request failed");
    }
    let json = serde_json::to_string(&ErrorBody {
        error: err.to_string(),
    })
    .unwrap_or_default();
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}
