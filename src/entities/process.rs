//! Process entity - maps a manufacturing process to a preset

use serde::{Deserialize, Serialize};

/// Entry of `processes.yaml`
///
/// When a part carries a process property (e.g. "Sawing") the matching
/// preset is pre-selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process name as written in the part's process property
    pub name: String,

    /// Name of the preset to pre-select
    pub preset: String,
}
