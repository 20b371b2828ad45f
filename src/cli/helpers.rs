//! Shared helper functions for CLI commands

use miette::Result;
use std::path::PathBuf;

use crate::cli::{logging, GlobalOpts};
use crate::core::config;
use crate::core::measure::format_value;
use crate::core::users::current_logon;
use crate::core::Resources;
use crate::entities::Preset;

/// Resolve the config directory and load everything in it
pub fn load_resources(global: &GlobalOpts) -> Result<(PathBuf, Resources)> {
    let dir = config::config_dir(global.config_dir.as_deref()).map_err(|e| miette::miette!("{}", e))?;
    let resources = Resources::load(&dir)?;
    if resources.settings.debug {
        logging::enable_debug();
    }
    Ok((dir, resources))
}

/// Directory the usage counter lives in
pub fn data_dir(global: &GlobalOpts) -> Result<PathBuf> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => config::data_dir().map_err(|e| miette::miette!("{}", e)),
    }
}

/// Logon name of the operator
pub fn logon(global: &GlobalOpts) -> Result<String> {
    current_logon(global.user.as_deref()).ok_or_else(|| {
        miette::miette!(
            help = "Pass --user <LOGON>",
            "Cannot determine the current user"
        )
    })
}

/// Look up a preset, listing the available names on failure
pub fn find_preset<'r>(resources: &'r Resources, name: &str) -> Result<&'r Preset> {
    resources.presets.get_preset_by_name(name).map_err(|e| {
        miette::miette!(
            help = format!("Available presets: {}", resources.presets.names().join(", ")),
            "{}",
            e
        )
    })
}

/// Render an `[x, y, z]` triple for display
pub fn format_triple(values: &[f64; 3]) -> String {
    values
        .iter()
        .map(|v| format_value(*v))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Truncate a string to max_len, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
