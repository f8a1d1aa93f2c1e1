//! Outbound client for the point-forecast collaborator.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use contour_common::ContourError;

use crate::config::GridSamplerConfig;

/// A source of batched point forecasts.
///
/// One call carries every sampled coordinate; implementations return one
/// hourly series per requested point, in request order.
#[async_trait]
pub trait PointForecastSource: Send + Sync {
    /// Fetch hourly values for `variable` at each `(lat, lon)` point.
    ///
    /// Each inner vector is indexed by forecast hour with `hours` entries;
    /// a missing value at an hour is `None`.
    async fn fetch_points(
        &self,
        points: &[(f64, f64)],
        variable: &str,
        hours: u32,
    ) -> Result<Vec<Vec<Option<f64>>>, ContourError>;
}

/// Per-location payload from the forecast API: hourly arrays keyed by
/// variable name.
#[derive(Debug, Deserialize)]
struct PointForecast {
    hourly: HashMap<String, Vec<Option<f64>>>,
}

/// The API returns an array for multi-point requests but collapses to a
/// bare object when it treats the batch as a single location.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchResponse {
    Many(Vec<PointForecast>),
    One(PointForecast),
}

/// HTTP implementation backed by reqwest.
pub struct HttpForecastClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpForecastClient {
    pub fn new(config: &GridSamplerConfig) -> Result<Self, ContourError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| {
                ContourError::UpstreamUnavailable(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl PointForecastSource for HttpForecastClient {
    #[instrument(skip(self, points), fields(num_points = points.len(), variable = variable))]
    async fn fetch_points(
        &self,
        points: &[(f64, f64)],
        variable: &str,
        hours: u32,
    ) -> Result<Vec<Vec<Option<f64>>>, ContourError> {
        let latitudes = points
            .iter()
            .map(|(lat, _)| format!("{:.4}", lat))
            .collect::<Vec<_>>()
            .join(",");
        let longitudes = points
            .iter()
            .map(|(_, lon)| format!("{:.4}", lon))
            .collect::<Vec<_>>()
            .join(",");
        let hours_str = hours.to_string();

        let mut request = self.client.get(&self.base_url).query(&[
            ("latitude", latitudes.as_str()),
            ("longitude", longitudes.as_str()),
            ("hourly", variable),
            ("forecast_hours", hours_str.as_str()),
        ]);
        if let Some(ref key) = self.api_key {
            request = request.query(&[("apikey", key.as_str())]);
        }

        // Single batched call, no retry: a failed fetch fails the request
        let response = request.send().await.map_err(|e| {
            ContourError::UpstreamUnavailable(format!("forecast request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "forecast source returned non-success status");
            return Err(ContourError::UpstreamUnavailable(format!(
                "forecast source returned {}",
                status
            )));
        }

        let body: BatchResponse = response.json().await.map_err(|e| {
            ContourError::ComputeError(format!("unexpected forecast payload: {}", e))
        })?;

        let per_point = match body {
            BatchResponse::Many(list) => {
                if list.len() != points.len() {
                    return Err(ContourError::ComputeError(format!(
                        "forecast source returned {} entries for {} points",
                        list.len(),
                        points.len()
                    )));
                }
                list.into_iter()
                    .map(|point| hourly_series(point, variable, hours))
                    .collect::<Result<Vec<_>, _>>()?
            }
            BatchResponse::One(single) => {
                // Shared location response: every sample sees the same series
                let series = hourly_series(single, variable, hours)?;
                vec![series; points.len()]
            }
        };

        debug!(num_points = per_point.len(), "fetched point forecasts");
        Ok(per_point)
    }
}

/// Pull the requested variable's hourly series out of a point payload,
/// padded or truncated to exactly `hours` entries.
fn hourly_series(
    forecast: PointForecast,
    variable: &str,
    hours: u32,
) -> Result<Vec<Option<f64>>, ContourError> {
    let mut hourly = forecast.hourly;
    let mut series = hourly.remove(variable).ok_or_else(|| {
        ContourError::ComputeError(format!(
            "forecast payload missing hourly variable '{}'",
            variable
        ))
    })?;
    series.resize(hours as usize, None);
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multi_point_payload() {
        let json = r#"[
            {"hourly": {"temperature_2m": [12.5, 13.0, null]}},
            {"hourly": {"temperature_2m": [11.0, null, 12.0]}}
        ]"#;
        let body: BatchResponse = serde_json::from_str(json).unwrap();
        let BatchResponse::Many(list) = body else {
            panic!("expected array payload");
        };
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].hourly["temperature_2m"][0], Some(12.5));
        assert_eq!(list[0].hourly["temperature_2m"][2], None);
    }

    #[test]
    fn test_parse_single_point_payload() {
        let json = r#"{"hourly": {"pressure_msl": [1013.2]}}"#;
        let body: BatchResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(body, BatchResponse::One(_)));
    }

    #[test]
    fn test_hourly_series_pads_short_arrays() {
        let forecast = PointForecast {
            hourly: HashMap::from([("temperature_2m".to_string(), vec![Some(10.0)])]),
        };
        let series = hourly_series(forecast, "temperature_2m", 3).unwrap();
        assert_eq!(series, vec![Some(10.0), None, None]);
    }

    #[test]
    fn test_hourly_series_missing_variable() {
        let forecast = PointForecast {
            hourly: HashMap::new(),
        };
        let err = hourly_series(forecast, "temperature_2m", 1).unwrap_err();
        assert!(matches!(err, ContourError::ComputeError(_)));
    }
}
