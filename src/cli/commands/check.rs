//! `basesize check` command - validate a hand-written base size

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{find_preset, load_resources};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::GlobalOpts;
use crate::core::is_valid_result;
use crate::core::validate::rejection_hint;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Base size to check, e.g. "100 x 80 x 20F"
    pub result: String,

    /// Preset whose pattern applies
    #[arg(long, short = 'p')]
    pub preset: String,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    result: &'a str,
    preset: &'a str,
    pattern: &'a str,
    valid: bool,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let (_, resources) = load_resources(global)?;
    let preset = find_preset(&resources, &args.preset)?;
    let valid = is_valid_result(&args.result, preset);

    let report = CheckReport {
        result: &args.result,
        preset: &preset.name,
        pattern: preset.result_pattern.as_str(),
        valid,
    };
    if !print_structured(&report, effective_format(global.format, false))? {
        if valid {
            println!(
                "{} '{}' is valid for preset {}",
                style("✓").green(),
                args.result,
                style(&preset.name).cyan()
            );
        } else {
            println!(
                "{} '{}' is not valid for preset {}",
                style("✗").red(),
                args.result,
                style(&preset.name).cyan()
            );
            println!();
            println!("{}", rejection_hint(preset));
        }
    }

    if valid {
        Ok(())
    } else {
        Err(miette::miette!("Validation failed"))
    }
}
