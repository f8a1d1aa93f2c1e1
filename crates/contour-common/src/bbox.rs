//! Bounding box parsing, validation, and padding.

use serde::{Deserialize, Serialize};

use crate::error::ContourError;

/// A geographic bounding box in degrees (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Create a new bounding box from edge coordinates.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Parse a bbox query parameter: "west,south,east,north".
    ///
    /// Requires exactly 4 finite numbers with `west < east` and
    /// `south < north`.
    pub fn from_query_string(s: &str) -> Result<Self, ContourError> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(ContourError::InvalidBbox(format!(
                "expected 4 components, got {}",
                parts.len()
            )));
        }

        let mut components = [0.0f64; 4];
        for (i, part) in parts.iter().enumerate() {
            let value: f64 = part.trim().parse().map_err(|_| {
                ContourError::InvalidBbox(format!("invalid number: {}", part))
            })?;
            if !value.is_finite() {
                return Err(ContourError::InvalidBbox(format!(
                    "non-finite component: {}",
                    part
                )));
            }
            components[i] = value;
        }

        let bbox = Self::new(components[0], components[1], components[2], components[3]);
        bbox.validate()?;
        Ok(bbox)
    }

    /// Check edge ordering.
    pub fn validate(&self) -> Result<(), ContourError> {
        if self.west >= self.east {
            return Err(ContourError::InvalidBbox(format!(
                "west ({}) must be less than east ({})",
                self.west, self.east
            )));
        }
        if self.south >= self.north {
            return Err(ContourError::InvalidBbox(format!(
                "south ({}) must be less than north ({})",
                self.south, self.north
            )));
        }
        Ok(())
    }

    /// Longitudinal span in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Latitudinal span in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Expand each axis by `fraction` of its span on both sides.
    pub fn padded(&self, fraction: f64) -> Self {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Self::new(
            self.west - dx,
            self.south - dy,
            self.east + dx,
            self.north + dy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox() {
        let bbox = BoundingBox::from_query_string("-125.0,24.0,-66.0,50.0").unwrap();
        assert_eq!(bbox.west, -125.0);
        assert_eq!(bbox.south, 24.0);
        assert_eq!(bbox.east, -66.0);
        assert_eq!(bbox.north, 50.0);
    }

    #[test]
    fn test_parse_wrong_component_count() {
        assert!(BoundingBox::from_query_string("-125.0,24.0,-66.0").is_err());
        assert!(BoundingBox::from_query_string("-125,24,-66,50,0").is_err());
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(BoundingBox::from_query_string("-125.0,24.0,-66.0,north").is_err());
    }

    #[test]
    fn test_parse_non_finite() {
        assert!(BoundingBox::from_query_string("-125.0,24.0,inf,50.0").is_err());
        assert!(BoundingBox::from_query_string("NaN,24.0,-66.0,50.0").is_err());
    }

    #[test]
    fn test_parse_inverted_edges() {
        assert!(BoundingBox::from_query_string("-66.0,24.0,-125.0,50.0").is_err());
        assert!(BoundingBox::from_query_string("-125.0,50.0,-66.0,24.0").is_err());
    }

    #[test]
    fn test_padded() {
        let bbox = BoundingBox::new(-100.0, 30.0, -90.0, 40.0);
        let padded = bbox.padded(0.10);
        assert_eq!(padded.west, -101.0);
        assert_eq!(padded.south, 29.0);
        assert_eq!(padded.east, -89.0);
        assert_eq!(padded.north, 41.0);
    }
}
