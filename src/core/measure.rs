//! Measurement values and parsing
//!
//! Bounding-box extents reach the engine from several places: the CAD host
//! hands over numbers, the command line and part files hand over strings.
//! [`ToMeasurement`] accepts both and turns them into a finite `f64`.

use thiserror::Error;

/// Errors raised when a value cannot be used as a measurement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    #[error("Invalid measurement: '{value}' is not a real number")]
    InvalidMeasurement { value: String },

    #[error("No bounding box available: {0}")]
    Unavailable(String),
}

/// Anything that can be interpreted as a single measured extent
pub trait ToMeasurement {
    /// Parse the value into a finite real number
    fn to_measurement(&self) -> Result<f64, MeasurementError>;
}

fn finite(value: f64, raw: impl std::fmt::Display) -> Result<f64, MeasurementError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeasurementError::InvalidMeasurement {
            value: raw.to_string(),
        })
    }
}

impl ToMeasurement for f64 {
    fn to_measurement(&self) -> Result<f64, MeasurementError> {
        finite(*self, self)
    }
}

impl ToMeasurement for f32 {
    fn to_measurement(&self) -> Result<f64, MeasurementError> {
        finite(f64::from(*self), self)
    }
}

impl ToMeasurement for i32 {
    fn to_measurement(&self) -> Result<f64, MeasurementError> {
        Ok(f64::from(*self))
    }
}

impl ToMeasurement for u32 {
    fn to_measurement(&self) -> Result<f64, MeasurementError> {
        Ok(f64::from(*self))
    }
}

impl ToMeasurement for str {
    fn to_measurement(&self) -> Result<f64, MeasurementError> {
        let parsed = self
            .trim()
            .parse::<f64>()
            .map_err(|_| MeasurementError::InvalidMeasurement {
                value: self.to_string(),
            })?;
        finite(parsed, self)
    }
}

impl ToMeasurement for String {
    fn to_measurement(&self) -> Result<f64, MeasurementError> {
        self.as_str().to_measurement()
    }
}

impl<T: ToMeasurement + ?Sized> ToMeasurement for &T {
    fn to_measurement(&self) -> Result<f64, MeasurementError> {
        (**self).to_measurement()
    }
}

/// Parse three inputs into an `[x, y, z]` triple
pub fn parse_triple(
    x: impl ToMeasurement,
    y: impl ToMeasurement,
    z: impl ToMeasurement,
) -> Result<[f64; 3], MeasurementError> {
    Ok([x.to_measurement()?, y.to_measurement()?, z.to_measurement()?])
}

/// Round a value to `digits` decimal places (half away from zero)
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Render a value the way base sizes are written
///
/// Whole numbers lose their decimal point (`20.0` → `"20"`), everything else
/// keeps its shortest round-trip representation (`20.5` → `"20.5"`).
/// Output is always positional, never exponent notation, so values below
/// 1e-4 come out as `"0.00001"` rather than `"1e-05"`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // covers -0.0 as well
        "0".to_string()
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Supplies bounding-box extents of the active part
///
/// Implemented by whatever stands in for the CAD host (a part file, a test
/// double). The extents are rounded to `precision` decimal places.
pub trait MeasurementProvider {
    fn measure(&self, precision: u32) -> Result<[f64; 3], MeasurementError>;
}
