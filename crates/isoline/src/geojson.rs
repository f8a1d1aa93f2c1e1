//! GeoJSON line-feature types for contour responses.

use serde::{Deserialize, Serialize};

/// A GeoJSON FeatureCollection of contour lines.
///
/// An empty collection is a valid, successful response when the grid has
/// no usable data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourFeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of contour line features.
    pub features: Vec<ContourFeature>,
}

impl ContourFeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    /// Add a feature to the collection.
    pub fn with_feature(mut self, feature: ContourFeature) -> Self {
        self.features.push(feature);
        self
    }
}

impl Default for ContourFeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A single contour line feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourFeature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// The line geometry of this contour.
    pub geometry: LineGeometry,

    /// Level value and display label.
    pub properties: ContourProperties,
}

impl ContourFeature {
    /// Create a line feature from ordered [longitude, latitude] pairs.
    pub fn line_string(
        coordinates: Vec<[f64; 2]>,
        level: f64,
        label: impl Into<String>,
    ) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: LineGeometry::LineString { coordinates },
            properties: ContourProperties {
                level,
                label: label.into(),
            },
        }
    }
}

/// Line geometry with [longitude, latitude] coordinate pairs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LineGeometry {
    LineString { coordinates: Vec<[f64; 2]> },
}

/// Properties carried by each contour feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourProperties {
    /// Contour level in display units.
    pub level: f64,

    /// Display label (level plus unit suffix).
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_serialization() {
        let feature = ContourFeature::line_string(
            vec![[-100.0, 35.0], [-99.5, 35.2]],
            64.0,
            "64°F",
        );
        let json = serde_json::to_string(&feature).unwrap();
        assert!(json.contains("\"type\":\"Feature\""));
        assert!(json.contains("\"type\":\"LineString\""));
        assert!(json.contains("\"coordinates\":[[-100.0,35.0],[-99.5,35.2]]"));
        assert!(json.contains("\"level\":64.0"));
        assert!(json.contains("\"label\":\"64°F\""));
    }

    #[test]
    fn test_empty_collection_serialization() {
        let collection = ContourFeatureCollection::new();
        let json = serde_json::to_string(&collection).unwrap();
        assert_eq!(json, "{\"type\":\"FeatureCollection\",\"features\":[]}");
    }
}
