//! Base size formatting
//!
//! Turns the adjusted extents into the string stored on the part, e.g.
//! `100 x 80 x 20F` for a box or `Ø20 x 100` for a turned part.

use tracing::warn;

use crate::core::axis::Axis;
use crate::core::measure::{format_value, parse_triple, ToMeasurement};
use crate::entities::preset::{CoordinateMode, Preset};

/// Separator between the individual dimensions
pub const DIMENSION_SEPARATOR: &str = " x ";

/// Prefix of the diameter in cylindrical results
pub const DIAMETER_SIGN: &str = "Ø";

/// Format the base size for a preset
///
/// Returns an empty string when one of the extents does not parse: that is
/// the "no result yet" state, not an error. The thickness slot is only used
/// by presets with coordinate tag 4 that declare a preference.
pub fn format_result(
    x: impl ToMeasurement,
    y: impl ToMeasurement,
    z: impl ToMeasurement,
    preset: &Preset,
    axis: Axis,
    thickness_enabled: bool,
    thickness_value: Option<&str>,
) -> String {
    let Ok(values) = parse_triple(x, y, z) else {
        return String::new();
    };

    match preset.mode() {
        CoordinateMode::Cylindrical => format_cylindrical(&values, axis),
        mode => {
            let thickness = if mode == CoordinateMode::BoxWithThickness && thickness_enabled {
                thickness_value.and_then(parse_thickness)
            } else {
                None
            };
            format_box(&values, preset, axis, thickness)
        }
    }
}

fn parse_thickness(raw: &str) -> Option<String> {
    match raw.to_measurement() {
        Ok(value) => Some(format_value(value)),
        Err(_) => {
            warn!(value = raw, "Thickness parameter cannot be read as a number");
            None
        }
    }
}

fn format_box(values: &[f64; 3], preset: &Preset, axis: Axis, thickness: Option<String>) -> String {
    let mut sorted: Vec<(Axis, f64)> = Axis::ALL.map(|a| (a, values[a.index()])).to_vec();
    // stable: equal extents keep X, Y, Z order in both directions
    if preset.sort_descending {
        sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    } else {
        sorted.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    }

    let mut parts: Vec<(Axis, String)> = sorted
        .into_iter()
        .map(|(a, v)| (a, format_value(v)))
        .collect();

    if let Some(postfix) = preset.preference_postfix.as_deref() {
        if let Some((_, text)) = parts.iter_mut().find(|(a, _)| *a == axis) {
            text.push_str(postfix);
        }
    }

    let joined: Vec<String> = if preset.preference.is_some() {
        let position = parts.iter().position(|(a, _)| *a == axis);
        let preferred = position.map(|i| parts.remove(i).1);
        let mut out: Vec<String> = parts.into_iter().map(|(_, text)| text).collect();
        out.extend(thickness);
        out.extend(preferred);
        out
    } else {
        parts.into_iter().map(|(_, text)| text).collect()
    };

    joined.join(DIMENSION_SEPARATOR)
}

fn format_cylindrical(values: &[f64; 3], axis: Axis) -> String {
    let length = values[axis.index()];
    let diameter = Axis::ALL
        .into_iter()
        .filter(|a| *a != axis)
        .map(|a| values[a.index()])
        .fold(f64::NEG_INFINITY, f64::max);

    format!(
        "{}{}{}{}",
        DIAMETER_SIGN,
        format_value(diameter),
        DIMENSION_SEPARATOR,
        format_value(length)
    )
}
