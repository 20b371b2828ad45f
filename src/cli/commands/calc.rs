//! `basesize calc` command - derive a base size from three extents

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{find_preset, format_triple, load_resources};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::GlobalOpts;
use crate::core::{Axis, Resources, Session, SessionError};
use crate::entities::Preset;

/// Live choices shared by `calc` and `apply`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TuningArgs {
    /// Preset name (default: first preset, or the pre-selected one for parts)
    #[arg(long, short = 'p')]
    pub preset: Option<String>,

    /// Override the preferred axis
    #[arg(long, short = 'a')]
    pub axis: Option<Axis>,

    /// Offset in mm
    #[arg(long, short = 'o', allow_negative_numbers = true)]
    pub offset: Option<i32>,

    /// Rounding step in mm (0 disables rounding)
    #[arg(long, short = 's')]
    pub step: Option<u32>,

    /// Leave the thickness out of the result
    #[arg(long)]
    pub no_thickness: bool,
}

#[derive(clap::Args, Debug)]
pub struct CalcArgs {
    /// Extent along X
    #[arg(allow_negative_numbers = true)]
    pub x: String,

    /// Extent along Y
    #[arg(allow_negative_numbers = true)]
    pub y: String,

    /// Extent along Z
    #[arg(allow_negative_numbers = true)]
    pub z: String,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Thickness value for presets with a thickness slot
    #[arg(long, short = 't')]
    pub thickness: Option<String>,

    /// Exit with an error when the result is not valid
    #[arg(long)]
    pub strict: bool,
}

/// Machine-readable view of a session
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub preset: String,
    pub axis: Axis,
    pub offset: i32,
    pub step: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    pub measured: [f64; 3],
    pub calculated: Option<[f64; 3]>,
    pub result: String,
    pub valid: bool,
}

impl SessionReport {
    pub fn from_session(session: &Session<'_>) -> Self {
        Self {
            preset: session.preset().map(|p| p.name.clone()).unwrap_or_default(),
            axis: session.axis(),
            offset: session.offset(),
            step: session.step(),
            thickness: session
                .thickness_enabled()
                .then(|| session.thickness_value().map(str::to_string))
                .flatten(),
            measured: session.measurements(),
            calculated: session.calculated(),
            result: session.result().to_string(),
            valid: session.is_valid(),
        }
    }
}

pub fn run(args: CalcArgs, global: &GlobalOpts) -> Result<()> {
    let (_, resources) = load_resources(global)?;

    let preset = match &args.tuning.preset {
        Some(name) => find_preset(&resources, name)?,
        None => resources.presets.first(),
    };

    let mut session = Session::new(&args.x, &args.y, &args.z, &resources.settings)
        .map_err(|e| miette::miette!("{}", e))?
        .with_thickness(args.thickness.clone());
    configure(&mut session, preset, &args.tuning)?;

    print_session(&session, &resources, global)?;

    if args.strict && !session.is_valid() {
        return Err(miette::miette!(
            "Base size '{}' is not valid for preset '{}'",
            session.result(),
            preset.name
        ));
    }
    Ok(())
}

/// Select the preset and apply the command-line overrides
pub fn configure<'a>(session: &mut Session<'a>, preset: &'a Preset, tuning: &TuningArgs) -> Result<()> {
    let report = |e: SessionError| miette::miette!("{}", e);

    session.select_preset(preset).map_err(report)?;
    if let Some(axis) = tuning.axis {
        if preset.preference.is_none() {
            eprintln!(
                "{} Preset '{}' has no preferred axis, --axis ignored",
                style("!").yellow(),
                preset.name
            );
        }
        session.select_axis(axis).map_err(report)?;
    }
    if let Some(offset) = tuning.offset {
        session.set_offset(offset).map_err(report)?;
    }
    if let Some(step) = tuning.step {
        session.set_step(step).map_err(report)?;
    }
    if tuning.no_thickness {
        session.set_thickness(false).map_err(report)?;
    }
    Ok(())
}

/// Print a session in the requested format
pub fn print_session(session: &Session<'_>, resources: &Resources, global: &GlobalOpts) -> Result<()> {
    let format = effective_format(global.format, false);
    if print_structured(&SessionReport::from_session(session), format)? {
        return Ok(());
    }

    let preset = session.preset().map(|p| p.name.as_str()).unwrap_or("-");
    println!("{}", style(&resources.settings.title).bold());
    println!("{}", style("─".repeat(40)).dim());
    println!("{:<12} {}", style("Preset:").bold(), preset);
    println!("{:<12} {}", style("Measured:").bold(), format_triple(&session.measurements()));
    if let Some(calculated) = session.calculated() {
        println!("{:<12} {}", style("Calculated:").bold(), format_triple(&calculated));
    }
    println!("{:<12} {}", style("Axis:").bold(), session.axis().label());
    println!(
        "{:<12} {} / {}",
        style("Offset/Step:").bold(),
        session.offset(),
        session.step()
    );
    if session.thickness_enabled() {
        if let Some(thickness) = session.thickness_value() {
            println!("{:<12} {}", style("Thickness:").bold(), thickness);
        }
    }
    println!("{}", style("─".repeat(40)).dim());

    if session.is_valid() {
        println!(
            "{} {}",
            style("✓").green(),
            style(session.result()).cyan().bold()
        );
    } else {
        println!("{} {}", style("✗").red(), style(session.result()).red());
        if let Some(hint) = session.rejection() {
            println!();
            println!("{}", style(hint).dim());
        }
    }
    Ok(())
}
