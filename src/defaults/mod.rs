//! Default configuration embedded in the binary

pub mod registry;

pub use registry::{ConfigFile, DefaultRegistry};
