//! Service configuration: sampler settings and the model table.

/// Configuration for the grid sampler and the forecast collaborator.
///
/// Passed explicitly through `AppState`; there is no process-wide mutable
/// configuration.
#[derive(Debug, Clone)]
pub struct GridSamplerConfig {
    /// Base URL of the point-forecast API.
    pub base_url: String,

    /// Optional API key sent with each request.
    pub api_key: Option<String>,

    /// Sample grid rows (north to south).
    pub grid_rows: usize,

    /// Sample grid columns (west to east).
    pub grid_cols: usize,

    /// Fractional padding applied to each bbox axis before sampling.
    pub padding: f64,

    /// Bilinear densification factor applied before contouring (1 = off).
    pub oversample: usize,

    /// Highest forecast hour a request may ask for.
    pub max_forecast_hour: u32,

    /// Outbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for GridSamplerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            api_key: None,
            grid_rows: 12,
            grid_cols: 12,
            padding: 0.10,
            oversample: 1,
            max_forecast_hour: 240,
            request_timeout_secs: 10,
        }
    }
}

impl GridSamplerConfig {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("FORECAST_BASE_URL") {
            config.base_url = url;
        }
        config.api_key = std::env::var("FORECAST_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        if let Some(rows) = env_usize("CONTOUR_GRID_ROWS") {
            config.grid_rows = rows.max(2);
        }
        if let Some(cols) = env_usize("CONTOUR_GRID_COLS") {
            config.grid_cols = cols.max(2);
        }
        if let Some(oversample) = env_usize("CONTOUR_OVERSAMPLE") {
            config.oversample = oversample.max(1);
        }
        if let Some(timeout) = env_usize("FORECAST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout as u64;
        }
        config
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Supported forecast models and the variables each can serve.
#[derive(Debug, Clone)]
pub struct ModelTable {
    models: Vec<ModelEntry>,
}

#[derive(Debug, Clone)]
struct ModelEntry {
    name: &'static str,
    variables: &'static [&'static str],
}

impl ModelTable {
    /// The built-in model table.
    pub fn builtin() -> Self {
        Self {
            models: vec![
                ModelEntry {
                    name: "gfs",
                    variables: &[
                        "temperature_2m",
                        "dew_point_2m",
                        "apparent_temperature",
                        "pressure_msl",
                        "geopotential_height_500hPa",
                    ],
                },
                ModelEntry {
                    name: "hrrr",
                    variables: &["temperature_2m", "dew_point_2m", "pressure_msl"],
                },
                ModelEntry {
                    name: "ecmwf",
                    variables: &[
                        "temperature_2m",
                        "pressure_msl",
                        "geopotential_height_500hPa",
                    ],
                },
            ],
        }
    }

    /// Whether `model` can serve `variable`.
    pub fn supports(&self, model: &str, variable: &str) -> bool {
        self.models
            .iter()
            .any(|entry| entry.name == model && entry.variables.contains(&variable))
    }
}
