//! Variable family classification, unit conversion, and contour spacing.

use serde::{Deserialize, Serialize};

/// Broad families of forecast variables sharing display units and contour
/// spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableFamily {
    Temperature,
    Pressure,
    Height,
    Other,
}

impl VariableFamily {
    /// Classify a variable name into its family.
    pub fn classify(variable: &str) -> Self {
        if variable.contains("temperature") || variable.contains("dew_point") {
            VariableFamily::Temperature
        } else if variable.contains("pressure") {
            VariableFamily::Pressure
        } else if variable.contains("geopotential_height") {
            VariableFamily::Height
        } else {
            VariableFamily::Other
        }
    }

    /// Convert a raw upstream value to display units.
    ///
    /// Temperature-family values arrive in Celsius and are displayed in
    /// Fahrenheit; all other families pass through unchanged.
    pub fn convert(&self, value: f64) -> f64 {
        match self {
            VariableFamily::Temperature => value * 9.0 / 5.0 + 32.0,
            _ => value,
        }
    }

    /// Contour interval in display units.
    pub fn contour_interval(&self) -> f64 {
        match self {
            VariableFamily::Temperature => 2.0,
            VariableFamily::Pressure => 4.0,
            VariableFamily::Height => 60.0,
            VariableFamily::Other => 10.0,
        }
    }

    /// Unit suffix appended to contour labels.
    pub fn unit_suffix(&self) -> &'static str {
        match self {
            VariableFamily::Temperature => "°F",
            VariableFamily::Pressure => "mb",
            VariableFamily::Height => "m",
            VariableFamily::Other => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            VariableFamily::classify("temperature_2m"),
            VariableFamily::Temperature
        );
        assert_eq!(
            VariableFamily::classify("dew_point_2m"),
            VariableFamily::Temperature
        );
        assert_eq!(
            VariableFamily::classify("apparent_temperature"),
            VariableFamily::Temperature
        );
        assert_eq!(
            VariableFamily::classify("pressure_msl"),
            VariableFamily::Pressure
        );
        assert_eq!(
            VariableFamily::classify("geopotential_height_500hPa"),
            VariableFamily::Height
        );
        assert_eq!(
            VariableFamily::classify("cloud_cover"),
            VariableFamily::Other
        );
    }

    #[test]
    fn test_temperature_conversion() {
        let family = VariableFamily::Temperature;
        assert_eq!(family.convert(0.0), 32.0);
        assert_eq!(family.convert(100.0), 212.0);
        assert_eq!(family.convert(-40.0), -40.0);
    }

    #[test]
    fn test_pressure_passthrough() {
        assert_eq!(VariableFamily::Pressure.convert(1008.4), 1008.4);
    }

    #[test]
    fn test_intervals_and_suffixes() {
        assert_eq!(VariableFamily::Temperature.contour_interval(), 2.0);
        assert_eq!(VariableFamily::Pressure.contour_interval(), 4.0);
        assert_eq!(VariableFamily::Height.contour_interval(), 60.0);
        assert_eq!(VariableFamily::Temperature.unit_suffix(), "°F");
        assert_eq!(VariableFamily::Pressure.unit_suffix(), "mb");
    }
}
