//! Iso-contour extraction for gridded forecast data.
//!
//! The pipeline runs leaves-first over an in-memory sample grid: level
//! selection from the grid's value range, marching squares per level,
//! greedy polyline stitching, and GeoJSON line-feature emission. All of it
//! is pure CPU-bound computation; the grid is built by the caller.

pub mod geojson;
pub mod grid;
pub mod levels;
pub mod marching;
pub mod stitch;

pub use geojson::{ContourFeature, ContourFeatureCollection, ContourProperties, LineGeometry};
pub use grid::{GridBounds, SampleGrid};
pub use marching::{GeoPoint, Segment};
pub use stitch::Polyline;

use contour_common::VariableFamily;

/// Generate the contour feature collection for a grid.
///
/// Levels are spaced by the variable family's interval and bracket the
/// grid's value range. A grid with no finite samples yields an empty
/// collection, not an error.
pub fn contour_grid(grid: &SampleGrid, family: VariableFamily) -> ContourFeatureCollection {
    let mut collection = ContourFeatureCollection::new();

    let Some((min_val, max_val)) = grid.value_range() else {
        tracing::debug!("grid has no finite samples, emitting empty collection");
        return collection;
    };

    let interval = family.contour_interval();
    let levels = levels::level_sequence(min_val, max_val, interval);

    tracing::debug!(
        min_val,
        max_val,
        interval,
        num_levels = levels.len(),
        "derived contour levels"
    );

    for &level in &levels {
        let segments = marching::march_squares(grid, level);
        if segments.is_empty() {
            continue;
        }

        let polylines = stitch::stitch_segments(&segments);
        for polyline in polylines {
            if polyline.points.len() < 2 {
                continue;
            }
            let coordinates = polyline.points.iter().map(|p| [p.lon, p.lat]).collect();
            let label = format_label(level, family);
            collection
                .features
                .push(ContourFeature::line_string(coordinates, level, label));
        }
    }

    tracing::debug!(
        num_features = collection.features.len(),
        "generated contour features"
    );
    collection
}

/// Display label for a level: the numeric value plus the family's unit
/// suffix, e.g. "64°F" or "1008mb".
fn format_label(level: f64, family: VariableFamily) -> String {
    let suffix = family.unit_suffix();
    if level.fract().abs() < 0.01 {
        format!("{:.0}{}", level, suffix)
    } else {
        format!("{:.1}{}", level, suffix)
    }
}
