//! Grid sampling over a padded bounding box and grid assembly.

use tracing::debug;

use contour_common::{BoundingBox, ContourError, VariableFamily};
use isoline::{GridBounds, SampleGrid};

use crate::config::GridSamplerConfig;

/// Geographic sample coordinates covering the padded bbox.
///
/// Row-major, row 0 at the padded northern edge and column 0 at the
/// western edge, matching the `SampleGrid` layout. Returns the `(lat, lon)`
/// pairs and the padded bounds they span.
pub fn sample_points(
    bbox: &BoundingBox,
    config: &GridSamplerConfig,
) -> (Vec<(f64, f64)>, GridBounds) {
    let padded = bbox.padded(config.padding);
    let rows = config.grid_rows;
    let cols = config.grid_cols;

    let bounds = GridBounds {
        lat_min: padded.south,
        lat_max: padded.north,
        lon_min: padded.west,
        lon_max: padded.east,
    };

    let mut points = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let row_frac = if rows > 1 {
            row as f64 / (rows - 1) as f64
        } else {
            0.0
        };
        let lat = bounds.lat_max - row_frac * (bounds.lat_max - bounds.lat_min);
        for col in 0..cols {
            let col_frac = if cols > 1 {
                col as f64 / (cols - 1) as f64
            } else {
                0.0
            };
            let lon = bounds.lon_min + col_frac * (bounds.lon_max - bounds.lon_min);
            points.push((lat, lon));
        }
    }

    (points, bounds)
}

/// Assemble per-point hourly responses into a sample grid.
///
/// `responses` is row-major in the order `sample_points` produced. Each
/// point contributes its value at `hour`, converted to display units; a
/// missing or non-finite value stays `None`, never zero.
pub fn build_grid(
    responses: &[Vec<Option<f64>>],
    hour: u32,
    family: VariableFamily,
    bounds: GridBounds,
    config: &GridSamplerConfig,
) -> Result<SampleGrid, ContourError> {
    let rows = config.grid_rows;
    let cols = config.grid_cols;
    if responses.len() != rows * cols {
        return Err(ContourError::ComputeError(format!(
            "expected {} point responses, got {}",
            rows * cols,
            responses.len()
        )));
    }

    let values: Vec<Option<f64>> = responses
        .iter()
        .map(|series| {
            series
                .get(hour as usize)
                .copied()
                .flatten()
                .filter(|v| v.is_finite())
                .map(|v| family.convert(v))
        })
        .collect();

    let null_count = values.iter().filter(|v| v.is_none()).count();
    debug!(rows, cols, null_count, "assembled sample grid");

    Ok(SampleGrid::new(rows, cols, bounds, values))
}
