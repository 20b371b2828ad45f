//! Part documents - where measurements come from and results go to
//!
//! The CAD host owns the real document. [`Document`] is the small surface
//! the application needs from it: named string properties and read-only
//! parameters. [`PartFile`] keeps the same data in a YAML file so the tool
//! can run without a CAD host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::measure::{round_to_precision, MeasurementError, MeasurementProvider, ToMeasurement};
use crate::yaml::{parse_yaml_file, write_yaml_file, YamlError};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(
        "Property '{0}' does not exist and may not be created. \
         All required properties must exist before saving"
    )]
    PropertyNotFound(String),

    #[error("Failed to read part file: {0}")]
    Read(#[from] YamlError),
}

/// Property and parameter access on a part document
pub trait Document {
    /// Document name, used in log output
    fn name(&self) -> &str;

    fn get_property(&self, name: &str) -> Option<String>;

    fn has_property(&self, name: &str) -> bool {
        self.get_property(name).is_some()
    }

    /// Create a property or overwrite its value
    fn set_property(&mut self, name: &str, value: &str);

    fn get_parameter(&self, name: &str) -> Option<String>;
}

/// Write a property, creating it only when allowed
pub fn write_property(
    doc: &mut dyn Document,
    name: &str,
    value: &str,
    allow_creation: bool,
) -> Result<(), DocumentError> {
    if !doc.has_property(name) && !allow_creation {
        return Err(DocumentError::PropertyNotFound(name.to_string()));
    }
    doc.set_property(name, value);
    info!(document = doc.name(), property = name, value, "Wrote property");
    Ok(())
}

/// Read a property, treating empty values as absent
pub fn read_property(doc: &dyn Document, name: &str) -> Option<String> {
    let value = doc.get_property(name).filter(|v| !v.is_empty());
    match &value {
        Some(v) => debug!(document = doc.name(), property = name, value = v.as_str(), "Retrieved property"),
        None => debug!(document = doc.name(), property = name, "Property not set"),
    }
    value
}

/// Extents of a part's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Document state kept in memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,

    #[serde(default)]
    pub parameters: BTreeMap<String, serde_yml::Value>,

    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl MemoryDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_bounding_box(mut self, x: f64, y: f64, z: f64) -> Self {
        self.bounding_box = Some(BoundingBox { x, y, z });
        self
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_parameter(mut self, name: &str, value: impl Into<serde_yml::Value>) -> Self {
        self.parameters.insert(name.to_string(), value.into());
        self
    }
}

fn value_to_string(value: &serde_yml::Value) -> Option<String> {
    match value {
        serde_yml::Value::String(s) => Some(s.clone()),
        serde_yml::Value::Number(n) => Some(n.to_string()),
        serde_yml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Document for MemoryDocument {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        self.parameters.get(name).and_then(value_to_string)
    }
}

impl MeasurementProvider for MemoryDocument {
    fn measure(&self, precision: u32) -> Result<[f64; 3], MeasurementError> {
        let bb = self.bounding_box.ok_or_else(|| {
            MeasurementError::Unavailable(format!("'{}' has no bounding box", self.name))
        })?;
        let values = [bb.x.to_measurement()?, bb.y.to_measurement()?, bb.z.to_measurement()?];
        Ok(values.map(|v| round_to_precision(v, precision)))
    }
}

/// A part document backed by a YAML file
#[derive(Debug, Clone)]
pub struct PartFile {
    path: PathBuf,
    doc: MemoryDocument,
}

impl PartFile {
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let mut doc: MemoryDocument = parse_yaml_file(path)?;
        if doc.name.is_empty() {
            doc.name = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
        }
        debug!(path = %path.display(), name = doc.name.as_str(), "Opened part file");
        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &MemoryDocument {
        &self.doc
    }

    /// Write all properties back to the file
    pub fn save(&self) -> Result<(), DocumentError> {
        write_yaml_file(&self.path, &self.doc)?;
        info!(path = %self.path.display(), "Saved part file");
        Ok(())
    }
}

impl Document for PartFile {
    fn name(&self) -> &str {
        self.doc.name()
    }

    fn get_property(&self, name: &str) -> Option<String> {
        self.doc.get_property(name)
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.doc.set_property(name, value)
    }

    fn get_parameter(&self, name: &str) -> Option<String> {
        self.doc.get_parameter(name)
    }
}

impl MeasurementProvider for PartFile {
    fn measure(&self, precision: u32) -> Result<[f64; 3], MeasurementError> {
        self.doc.measure(precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_property_respects_creation_permission() {
        let mut doc = MemoryDocument::new("part").with_property("base_size", "");
        assert!(write_property(&mut doc, "base_size", "100 x 50 x 20", false).is_ok());
        assert_eq!(doc.get_property("base_size").as_deref(), Some("100 x 50 x 20"));

        let err = write_property(&mut doc, "modifier", "jdoe", false).unwrap_err();
        assert!(matches!(err, DocumentError::PropertyNotFound(name) if name == "modifier"));

        write_property(&mut doc, "modifier", "jdoe", true).unwrap();
        assert_eq!(doc.get_property("modifier").as_deref(), Some("jdoe"));
    }

    #[test]
    fn test_read_property_ignores_empty_values() {
        let doc = MemoryDocument::new("part")
            .with_property("creator", "")
            .with_property("process", "Sawing");
        assert_eq!(read_property(&doc, "creator"), None);
        assert_eq!(read_property(&doc, "process").as_deref(), Some("Sawing"));
        assert_eq!(read_property(&doc, "missing"), None);
    }

    #[test]
    fn test_parameters_render_as_strings() {
        let doc = MemoryDocument::new("part")
            .with_parameter("Thickness", 2.5)
            .with_parameter("Material", "S235");
        assert_eq!(doc.get_parameter("Thickness").as_deref(), Some("2.5"));
        assert_eq!(doc.get_parameter("Material").as_deref(), Some("S235"));
        assert_eq!(doc.get_parameter("Missing"), None);
    }

    #[test]
    fn test_measure_rounds_to_precision() {
        let doc = MemoryDocument::new("part").with_bounding_box(100.004, 80.126, 20.0);
        assert_eq!(doc.measure(2).unwrap(), [100.0, 80.13, 20.0]);
        assert_eq!(doc.measure(0).unwrap(), [100.0, 80.0, 20.0]);
    }

    #[test]
    fn test_measure_without_bounding_box() {
        let doc = MemoryDocument::new("part");
        assert!(matches!(doc.measure(2), Err(MeasurementError::Unavailable(_))));
    }

    #[test]
    fn test_part_file_round_trip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bracket.yaml");
        std::fs::write(
            &path,
            "bounding_box: {x: 100, y: 80, z: 20}\nparameters:\n  Thickness: 2\nproperties:\n  process: Sawing\n",
        )
        .unwrap();

        let mut part = PartFile::open(&path).unwrap();
        assert_eq!(part.name(), "bracket");
        assert_eq!(part.get_parameter("Thickness").as_deref(), Some("2"));
        assert_eq!(part.measure(2).unwrap(), [100.0, 80.0, 20.0]);

        write_property(&mut part, "base_size", "100 x 80 x 20F", true).unwrap();
        part.save().unwrap();

        let reopened = PartFile::open(&path).unwrap();
        assert_eq!(
            reopened.get_property("base_size").as_deref(),
            Some("100 x 80 x 20F")
        );
        assert_eq!(reopened.get_property("process").as_deref(), Some("Sawing"));
    }
}
