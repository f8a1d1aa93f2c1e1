//! Error types for the contour services.

use thiserror::Error;

/// Result type alias using ContourError.
pub type ContourResult<T> = Result<T, ContourError>;

/// Primary error type for contour requests.
///
/// "No data" is intentionally not represented here: a grid with no finite
/// samples is a successful empty result, not a failure.
#[derive(Debug, Error)]
pub enum ContourError {
    // === Request errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid BBOX: {0}")]
    InvalidBbox(String),

    #[error("Variable '{variable}' not supported by model '{model}'")]
    UnsupportedVariable { model: String, variable: String },

    // === Upstream errors ===
    #[error("Forecast source unavailable: {0}")]
    UpstreamUnavailable(String),

    // === Pipeline errors ===
    #[error("Contour computation failed: {0}")]
    ComputeError(String),
}

impl ContourError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ContourError::MissingParameter(_)
            | ContourError::InvalidParameter { .. }
            | ContourError::InvalidBbox(_)
            | ContourError::UnsupportedVariable { .. } => 400,

            ContourError::UpstreamUnavailable(_) => 502,

            ContourError::ComputeError(_) => 500,
        }
    }
}

impl From<serde_json::Error> for ContourError {
    fn from(err: serde_json::Error) -> Self {
        ContourError::ComputeError(format!("JSON error: {}", err))
    }
}
