//! basesize: base size derivation for machined parts
//!
//! Turns the bounding box of a part into the stock size it is made from,
//! following a named preset (offset, rounding, preferred axis, layout) and
//! checks the result against the preset's pattern before saving it.

pub mod cli;
pub mod core;
pub mod defaults;
pub mod entities;
pub mod yaml;
