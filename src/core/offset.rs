//! Offset and rounding of the measured extents
//!
//! Raw extents are grown by a machining allowance (the offset) and snapped
//! up to the next stock increment (the step).

use crate::core::axis::Axis;
use crate::core::measure::{parse_triple, MeasurementError, ToMeasurement};
use crate::entities::preset::Preset;

/// Tolerance subtracted from the half step before rounding
///
/// Values within 0.01 mm above a multiple of the step still snap to that
/// multiple instead of the next one.
pub const ROUNDING_BIAS: f64 = 0.01;

/// Which axes receive the offset transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// The preset has a preferred axis: the preferred axis and the two others
    /// are switched independently.
    AxisAware {
        applies_preferred: bool,
        applies_others: bool,
    },
    /// No preferred axis: all three axes or none.
    Uniform { enabled: bool },
}

impl OffsetPolicy {
    pub fn applies_to(self, axis: Axis, preferred: Axis) -> bool {
        match self {
            OffsetPolicy::AxisAware {
                applies_preferred,
                applies_others,
            } => {
                if axis == preferred {
                    applies_preferred
                } else {
                    applies_others
                }
            }
            OffsetPolicy::Uniform { enabled } => enabled,
        }
    }
}

/// Add the offset and snap to the step grid
///
/// `round((value + offset + step/2 - 0.01) / step) * step`, where the integer
/// rounding resolves exact halves to the even neighbour. A step of zero
/// returns the value untouched, offset included.
pub fn apply_offset(value: f64, offset: i32, step: u32) -> f64 {
    if step == 0 {
        return value;
    }
    let step = f64::from(step);
    let biased = value + f64::from(offset) + (step / 2.0 - ROUNDING_BIAS);
    (biased / step).round_ties_even() * step
}

/// Apply the live offset and step to the extents the preset selects
///
/// Returns the adjusted `(x, y, z)` in the same axis order; axes the policy
/// skips pass through unchanged.
pub fn calculate_offsets(
    x: impl ToMeasurement,
    y: impl ToMeasurement,
    z: impl ToMeasurement,
    preset: &Preset,
    axis: Axis,
    offset: i32,
    step: u32,
) -> Result<(f64, f64, f64), MeasurementError> {
    let values = parse_triple(x, y, z)?;
    let policy = preset.offset_policy();

    let adjusted = Axis::ALL.map(|a| {
        let value = values[a.index()];
        if policy.applies_to(a, axis) {
            apply_offset(value, offset, step)
        } else {
            value
        }
    });

    Ok((adjusted[0], adjusted[1], adjusted[2]))
}
