//! Preferred-axis resolution
//!
//! Maps the three extents of a part to the axis a preset wants to treat
//! specially (the sawn face, the turning axis, ...).

use crate::core::axis::Axis;
use crate::core::measure::{parse_triple, MeasurementError, ToMeasurement};
use crate::entities::preset::{Preference, Preset};

/// Pick the preferred axis for a preset
///
/// - `min` / `max`: axis with the smallest / largest extent, ties go to the
///   earlier axis (X before Y before Z).
/// - `axis`: the single extent that no other axis shares. Two equal extents
///   describe a round cross-section, so the odd one out is the turning axis.
///   When no single odd one exists (all equal, or all distinct as on a hex
///   head) the largest extent wins.
/// - no preference: always X.
pub fn resolve_preferred_axis(
    x: impl ToMeasurement,
    y: impl ToMeasurement,
    z: impl ToMeasurement,
    preset: &Preset,
) -> Result<Axis, MeasurementError> {
    let values = parse_triple(x, y, z)?;

    let axis = match preset.preference {
        Some(Preference::Min) => min_axis(&values),
        Some(Preference::Max) => max_axis(&values),
        Some(Preference::Axis) => turning_axis(&values),
        None => Axis::X,
    };

    Ok(axis)
}

fn min_axis(values: &[f64; 3]) -> Axis {
    let mut best = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
        if values[axis.index()] < values[best.index()] {
            best = axis;
        }
    }
    best
}

fn max_axis(values: &[f64; 3]) -> Axis {
    let mut best = Axis::X;
    for axis in [Axis::Y, Axis::Z] {
        if values[axis.index()] > values[best.index()] {
            best = axis;
        }
    }
    best
}

fn turning_axis(values: &[f64; 3]) -> Axis {
    let unique: Vec<Axis> = Axis::ALL
        .into_iter()
        .filter(|axis| {
            let v = values[axis.index()];
            values.iter().filter(|&&other| other == v).count() == 1
        })
        .collect();

    match unique.as_slice() {
        [only] => *only,
        _ => max_axis(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(preference: Option<Preference>) -> Preset {
        Preset::fixture("Resolver", 3, preference)
    }

    #[test]
    fn test_min_picks_smallest() {
        let p = preset(Some(Preference::Min));
        assert_eq!(resolve_preferred_axis(100, 80, 20, &p).unwrap(), Axis::Z);
        assert_eq!(resolve_preferred_axis(5, 80, 20, &p).unwrap(), Axis::X);
        assert_eq!(resolve_preferred_axis(50, 8, 20, &p).unwrap(), Axis::Y);
    }

    #[test]
    fn test_max_picks_largest() {
        let p = preset(Some(Preference::Max));
        assert_eq!(resolve_preferred_axis(100, 80, 20, &p).unwrap(), Axis::X);
        assert_eq!(resolve_preferred_axis(10, 80, 20, &p).unwrap(), Axis::Y);
        assert_eq!(resolve_preferred_axis(10, 80, 200.5, &p).unwrap(), Axis::Z);
    }

    #[test]
    fn test_min_max_ties_follow_axis_order() {
        let min = preset(Some(Preference::Min));
        let max = preset(Some(Preference::Max));
        assert_eq!(resolve_preferred_axis(20, 20, 20, &min).unwrap(), Axis::X);
        assert_eq!(resolve_preferred_axis(20, 20, 20, &max).unwrap(), Axis::X);
        assert_eq!(resolve_preferred_axis(50, 20, 20, &min).unwrap(), Axis::Y);
        assert_eq!(resolve_preferred_axis(10, 50, 50, &max).unwrap(), Axis::Y);
    }

    #[test]
    fn test_turning_axis_is_the_odd_one_out() {
        let p = preset(Some(Preference::Axis));
        assert_eq!(resolve_preferred_axis(20, 20, 100, &p).unwrap(), Axis::Z);
        assert_eq!(resolve_preferred_axis(80, 80, 20, &p).unwrap(), Axis::Z);
        assert_eq!(resolve_preferred_axis(20, 100, 20, &p).unwrap(), Axis::Y);
        // smaller than the pair, still picked
        assert_eq!(resolve_preferred_axis(5, 30, 30, &p).unwrap(), Axis::X);
    }

    #[test]
    fn test_turning_axis_falls_back_to_max() {
        let p = preset(Some(Preference::Axis));
        // hex head: all distinct
        assert_eq!(resolve_preferred_axis(20, 25, 100, &p).unwrap(), Axis::Z);
        assert_eq!(resolve_preferred_axis(100, 80, 20, &p).unwrap(), Axis::X);
        // cube: no unique value
        assert_eq!(resolve_preferred_axis(30, 30, 30, &p).unwrap(), Axis::X);
    }

    #[test]
    fn test_no_preference_is_always_x() {
        let p = preset(None);
        assert_eq!(resolve_preferred_axis(100, 80, 20, &p).unwrap(), Axis::X);
        assert_eq!(resolve_preferred_axis(1, 80, 200, &p).unwrap(), Axis::X);
    }

    #[test]
    fn test_string_inputs_are_parsed() {
        let p = preset(Some(Preference::Min));
        assert_eq!(
            resolve_preferred_axis("100.5", "80", "20.25", &p).unwrap(),
            Axis::Z
        );
    }

    #[test]
    fn test_invalid_measurement_is_an_error() {
        let p = preset(None);
        let err = resolve_preferred_axis("a", 20, 100, &p).unwrap_err();
        assert!(matches!(err, MeasurementError::InvalidMeasurement { .. }));
    }
}
