//! Axis identifiers for the three bounding-box extents

use serde::{Deserialize, Serialize};

/// One of the three orthogonal axes of a part's bounding box
///
/// The declaration order (X < Y < Z) is only used to break ties
/// deterministically, never to compare magnitudes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in declaration order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in an `[x, y, z]` triple
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Long label used in user-facing output (e.g. "X-Axis")
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X-Axis",
            Axis::Y => "Y-Axis",
            Axis::Z => "Z-Axis",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" | "x-axis" => Ok(Axis::X),
            "y" | "y-axis" => Ok(Axis::Y),
            "z" | "z-axis" => Ok(Axis::Z),
            _ => Err(format!("Invalid axis: '{}'. Use 'x', 'y' or 'z'", s)),
        }
    }
}
