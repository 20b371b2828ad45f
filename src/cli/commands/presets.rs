//! `basesize presets` command - inspect the preset catalog

use clap::Subcommand;
use console::style;
use miette::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::{find_preset, load_resources, truncate_str};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::Preset;

#[derive(Subcommand, Debug)]
pub enum PresetsCommands {
    /// List all presets in catalog order
    List,

    /// Show one preset
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Preset name
    pub name: String,
}

#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "MODE")]
    mode: String,
    #[tabled(rename = "PREFERENCE")]
    preference: String,
    #[tabled(rename = "OFFSET")]
    offset: String,
    #[tabled(rename = "STEP")]
    step: u32,
    #[tabled(rename = "DESCRIPTION")]
    tooltip: String,
}

impl PresetRow {
    fn from_preset(preset: &Preset) -> Self {
        let preference = match (&preset.preference, &preset.preference_postfix) {
            (Some(p), Some(postfix)) => format!("{} (+{})", p, postfix),
            (Some(p), None) => p.to_string(),
            (None, _) => "-".to_string(),
        };
        Self {
            name: preset.name.clone(),
            mode: preset.mode().to_string(),
            preference,
            offset: preset
                .offset
                .filter(|_| preset.offset_enabled())
                .map_or_else(|| "-".to_string(), |o| o.to_string()),
            step: preset.step,
            tooltip: truncate_str(&preset.tooltip, 50),
        }
    }
}

pub fn run(cmd: PresetsCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PresetsCommands::List => run_list(global),
        PresetsCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let (_, resources) = load_resources(global)?;
    let presets: Vec<&Preset> = resources.presets.iter().collect();

    let format = effective_format(global.format, true);
    if print_structured(&presets, format)? {
        return Ok(());
    }

    if format == OutputFormat::Text {
        for preset in &presets {
            println!("{}", preset.name);
        }
        return Ok(());
    }

    let rows: Vec<PresetRow> = presets.iter().map(|p| PresetRow::from_preset(p)).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    println!();
    println!("{} preset(s)", style(presets.len()).cyan());
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (_, resources) = load_resources(global)?;
    let preset = find_preset(&resources, &args.name)?;

    if print_structured(preset, effective_format(global.format, false))? {
        return Ok(());
    }

    println!("{}", style(&preset.name).bold().cyan());
    println!("{}", style("─".repeat(40)).dim());
    println!("{:<14} {} ({})", style("Mode:").bold(), preset.mode(), preset.coordinate_mode);
    println!(
        "{:<14} {}",
        style("Preference:").bold(),
        preset
            .preference
            .map_or_else(|| "none (X axis)".to_string(), |p| p.to_string())
    );
    if let Some(postfix) = &preset.preference_postfix {
        println!("{:<14} {}", style("Postfix:").bold(), postfix);
    }
    if preset.offset_enabled() {
        println!(
            "{:<14} {} mm, step {} mm",
            style("Offset:").bold(),
            preset.initial_offset(),
            preset.initial_step()
        );
        if preset.preference.is_some() {
            println!(
                "{:<14} preferred axis: {}, other axes: {}",
                style("Applies to:").bold(),
                yes_no(preset.offset_applies_to_preferred),
                yes_no(preset.offset_applies_to_others)
            );
        }
    } else {
        println!("{:<14} none", style("Offset:").bold());
    }
    println!(
        "{:<14} {}",
        style("Sort:").bold(),
        if preset.sort_descending { "largest first" } else { "smallest first" }
    );
    println!("{:<14} {}", style("Pattern:").bold(), preset.result_pattern);
    for example in &preset.pattern_examples {
        println!("{:<14} {}", style("Example:").bold(), example);
    }
    if !preset.tooltip.is_empty() {
        println!();
        println!("{}", preset.tooltip);
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
