//! Core module - the derivation engine and its configuration

pub mod appdata;
pub mod axis;
pub mod catalog;
pub mod config;
pub mod document;
pub mod format;
pub mod measure;
pub mod offset;
pub mod preselect;
pub mod resolver;
pub mod resources;
pub mod session;
pub mod users;
pub mod validate;

pub use appdata::{AppData, AppDataStore};
pub use axis::Axis;
pub use catalog::{CatalogError, PresetCatalog};
pub use config::{ConfigError, PropertyNames, ScaleRange, Settings};
pub use document::{Document, DocumentError, MemoryDocument, PartFile};
pub use format::format_result;
pub use measure::{MeasurementError, MeasurementProvider, ToMeasurement};
pub use offset::calculate_offsets;
pub use preselect::{preselect_preset, Preselection, Reason};
pub use resolver::resolve_preferred_axis;
pub use resources::{ResourceError, Resources};
pub use session::{CommitContext, CommitReport, Session, SessionError, SessionState, Validity};
pub use users::UserTable;
pub use validate::{is_valid_result, ResultPattern};
