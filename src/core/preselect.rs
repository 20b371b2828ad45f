//! Preset pre-selection for a part document

use tracing::{debug, warn};

use crate::core::document::{read_property, Document};
use crate::core::resources::Resources;
use crate::entities::preset::Preset;

/// Why a preset was pre-selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The document already names a preset
    ExistingProperty,
    /// The document's process maps to a preset
    Process(String),
    /// Nothing matched, first preset of the catalog
    Default,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reason::ExistingProperty => write!(f, "stored on the part"),
            Reason::Process(name) => write!(f, "process '{}'", name),
            Reason::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Preselection<'a> {
    pub preset: &'a Preset,
    pub reason: Reason,
}

/// Pick the preset a document should start with
///
/// A stored preset name wins over the process mapping, which wins over the
/// first preset of the catalog. Names that no longer resolve are skipped.
pub fn preselect_preset<'a>(doc: &dyn Document, resources: &'a Resources) -> Preselection<'a> {
    if let Some(name) = read_property(doc, &resources.props.base_size_preset) {
        match resources.presets.get(&name) {
            Some(preset) => {
                debug!(preset = name.as_str(), "Pre-selected preset from part property");
                return Preselection {
                    preset,
                    reason: Reason::ExistingProperty,
                };
            }
            None => warn!(preset = name.as_str(), "Part names a preset that doesn't exist"),
        }
    }

    if let Some(process_name) = read_property(doc, &resources.props.process) {
        let preset = resources
            .get_process_by_name(&process_name)
            .and_then(|process| resources.presets.get(&process.preset));
        if let Some(preset) = preset {
            debug!(
                process = process_name.as_str(),
                preset = preset.name.as_str(),
                "Pre-selected preset from process"
            );
            return Preselection {
                preset,
                reason: Reason::Process(process_name),
            };
        }
        debug!(process = process_name.as_str(), "No preset mapped to process");
    }

    Preselection {
        preset: resources.presets.first(),
        reason: Reason::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::MemoryDocument;

    #[test]
    fn test_existing_property_wins() {
        let res = Resources::embedded().unwrap();
        let doc = MemoryDocument::new("part")
            .with_property("base_size_preset", "Cut")
            .with_property("process", "Sawing");
        let sel = preselect_preset(&doc, &res);
        assert_eq!(sel.preset.name, "Cut");
        assert_eq!(sel.reason, Reason::ExistingProperty);
    }

    #[test]
    fn test_process_mapping() {
        let res = Resources::embedded().unwrap();
        let doc = MemoryDocument::new("part").with_property("process", "Turning");
        let sel = preselect_preset(&doc, &res);
        assert_eq!(sel.preset.name, "Shaft");
        assert_eq!(sel.reason, Reason::Process("Turning".into()));
    }

    #[test]
    fn test_stale_preset_falls_through_to_process() {
        let res = Resources::embedded().unwrap();
        let doc = MemoryDocument::new("part")
            .with_property("base_size_preset", "Gone")
            .with_property("process", "Sawing");
        let sel = preselect_preset(&doc, &res);
        assert_eq!(sel.preset.name, "Sawn");
    }

    #[test]
    fn test_default_is_first_preset() {
        let res = Resources::embedded().unwrap();
        let doc = MemoryDocument::new("part").with_property("process", "Welding");
        let sel = preselect_preset(&doc, &res);
        assert_eq!(sel.preset.name, res.presets.first().name);
        assert_eq!(sel.reason, Reason::Default);
    }
}
