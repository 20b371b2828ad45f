//! Preset entity - a named policy for deriving a base size

use serde::{Deserialize, Serialize};

use crate::core::offset::OffsetPolicy;
use crate::core::validate::ResultPattern;

/// Policy for picking the preferred axis out of the three extents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Axis holding the smallest extent (e.g. sawn plate thickness)
    Min,
    /// Axis holding the largest extent
    Max,
    /// Turning axis: the one extent that differs from the other two
    Axis,
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preference::Min => write!(f, "min"),
            Preference::Max => write!(f, "max"),
            Preference::Axis => write!(f, "axis"),
        }
    }
}

/// How the final string is laid out, derived from the numeric coordinate tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateMode {
    /// Tag 3: length x width x height
    Box,
    /// Tag 4: like `Box`, with an optional thickness slot before the preferred axis
    BoxWithThickness,
    /// Any other tag: diameter x length
    Cylindrical,
}

impl CoordinateMode {
    pub fn from_tag(tag: i64) -> Self {
        match tag {
            3 => CoordinateMode::Box,
            4 => CoordinateMode::BoxWithThickness,
            _ => CoordinateMode::Cylindrical,
        }
    }

    pub fn is_box(self) -> bool {
        !matches!(self, CoordinateMode::Cylindrical)
    }
}

impl std::fmt::Display for CoordinateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateMode::Box => write!(f, "box"),
            CoordinateMode::BoxWithThickness => write!(f, "box+thickness"),
            CoordinateMode::Cylindrical => write!(f, "cylindrical"),
        }
    }
}

/// A preset as stored in `presets.yaml`
///
/// Field aliases accept the older key names (`coord`, `result_filter`, ...)
/// so existing preset files keep loading. Every policy field has to be
/// spelled out; only the optional ones (`preference`, `preference_postfix`,
/// `offset`) may be left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    /// Unique preset name
    pub name: String,

    /// Coordinate tag: 3 or 4 for box layouts, anything else for cylindrical
    #[serde(alias = "coord")]
    pub coordinate_mode: i64,

    /// Preferred-axis policy; absent means the X axis is always used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,

    /// Appended to the preferred axis' value (e.g. "F" for a milled face)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_postfix: Option<String>,

    /// Default offset in mm; absent or zero disables offset control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,

    /// Rounding granularity in mm; 0 disables rounding
    pub step: u32,

    /// Apply offset and rounding to the preferred axis
    #[serde(alias = "offset_preference")]
    pub offset_applies_to_preferred: bool,

    /// Apply offset and rounding to the two other axes
    #[serde(alias = "offset_non_preference")]
    pub offset_applies_to_others: bool,

    /// Sort the extents from largest to smallest
    #[serde(alias = "sort_max_to_min")]
    pub sort_descending: bool,

    /// Pattern the whole result must match before it may be saved
    #[serde(alias = "result_filter")]
    pub result_pattern: ResultPattern,

    /// Example results shown when validation fails
    #[serde(alias = "filter_examples")]
    pub pattern_examples: Vec<String>,

    /// Descriptive text
    pub tooltip: String,
}

impl Preset {
    pub fn mode(&self) -> CoordinateMode {
        CoordinateMode::from_tag(self.coordinate_mode)
    }

    /// Whether the offset and step controls are live for this preset
    pub fn offset_enabled(&self) -> bool {
        self.offset.is_some_and(|o| o != 0)
    }

    /// Which axes the offset transform applies to
    pub fn offset_policy(&self) -> OffsetPolicy {
        match self.preference {
            Some(_) => OffsetPolicy::AxisAware {
                applies_preferred: self.offset_applies_to_preferred,
                applies_others: self.offset_applies_to_others,
            },
            None => OffsetPolicy::Uniform {
                enabled: self.offset_enabled(),
            },
        }
    }

    /// Offset the session starts with after this preset is picked
    pub fn initial_offset(&self) -> i32 {
        if self.offset_enabled() {
            self.offset.unwrap_or_default()
        } else {
            0
        }
    }

    /// Step the session starts with after this preset is picked
    pub fn initial_step(&self) -> u32 {
        if self.offset_enabled() {
            self.step
        } else {
            0
        }
    }
}

#[cfg(test)]
impl Preset {
    /// Permissive preset for unit tests; adjust fields as needed
    pub(crate) fn fixture(name: &str, coordinate_mode: i64, preference: Option<Preference>) -> Self {
        Self {
            name: name.to_string(),
            coordinate_mode,
            preference,
            preference_postfix: None,
            offset: None,
            step: 0,
            offset_applies_to_preferred: false,
            offset_applies_to_others: false,
            sort_descending: false,
            result_pattern: ResultPattern::new(".*").unwrap(),
            pattern_examples: Vec::new(),
            tooltip: String::new(),
        }
    }
}
