//! CLI command implementations

pub mod apply;
pub mod calc;
pub mod check;
pub mod completions;
pub mod config;
pub mod presets;
