//! Configuration record types

pub mod info;
pub mod preset;
pub mod process;
pub mod user;

pub use info::Info;
pub use preset::{CoordinateMode, Preference, Preset};
pub use process::Process;
pub use user::User;
