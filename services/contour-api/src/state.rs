//! Application state for the contour API.

use std::sync::Arc;

use anyhow::Result;

use crate::config::{GridSamplerConfig, ModelTable};
use crate::forecast::{HttpForecastClient, PointForecastSource};

/// Shared application state.
pub struct AppState {
    /// Sampler and upstream configuration.
    pub config: GridSamplerConfig,

    /// Supported model/variable combinations.
    pub models: ModelTable,

    /// The point-forecast collaborator.
    pub forecast: Arc<dyn PointForecastSource>,
}

impl AppState {
    /// Create state from environment configuration.
    pub fn new() -> Result<Self> {
        let config = GridSamplerConfig::from_env();
        let forecast = Arc::new(HttpForecastClient::new(&config)?);
        Ok(Self {
            config,
            models: ModelTable::builtin(),
            forecast,
        })
    }

    /// State with an injected forecast source, used by tests.
    pub fn with_source(config: GridSamplerConfig, forecast: Arc<dyn PointForecastSource>) -> Self {
        Self {
            config,
            models: ModelTable::builtin(),
            forecast,
        }
    }
}
