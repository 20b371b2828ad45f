//! `basesize apply` command - derive and save the base size of a part file

use console::style;
use miette::Result;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::commands::calc::{configure, print_session, TuningArgs};
use crate::cli::helpers::{data_dir, find_preset, load_resources, logon};
use crate::cli::GlobalOpts;
use crate::core::{
    preselect_preset, AppDataStore, CommitContext, Document, MeasurementProvider, PartFile,
    Reason, Session,
};

#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    /// Part file (YAML with bounding_box, parameters and properties)
    pub part: PathBuf,

    #[command(flatten)]
    pub tuning: TuningArgs,

    /// Show the result without saving it
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: ApplyArgs, global: &GlobalOpts) -> Result<()> {
    let (_, resources) = load_resources(global)?;
    let settings = &resources.settings;

    let mut part = PartFile::open(&args.part).map_err(|e| miette::miette!("{}", e))?;
    let [x, y, z] = part
        .measure(settings.precision)
        .map_err(|e| miette::miette!("{}", e))?;

    let (preset, reason) = match &args.tuning.preset {
        Some(name) => (find_preset(&resources, name)?, None),
        None => {
            let selection = preselect_preset(&part, &resources);
            (selection.preset, Some(selection.reason))
        }
    };
    if let Some(reason) = &reason {
        if *reason != Reason::Default {
            eprintln!(
                "{} Using preset {} ({})",
                style("→").blue(),
                style(&preset.name).cyan(),
                reason
            );
        }
    }

    let thickness = part.get_parameter(&settings.parameters.thickness);
    let mut session = Session::new(x, y, z, settings)
        .map_err(|e| miette::miette!("{}", e))?
        .with_thickness(thickness);
    configure(&mut session, preset, &args.tuning)?;

    print_session(&session, &resources, global)?;

    if !session.is_valid() {
        return Err(miette::miette!(
            "Base size '{}' is not valid for preset '{}', nothing saved",
            session.result(),
            preset.name
        ));
    }

    if args.dry_run {
        eprintln!("{} Dry run, {} not modified", style("→").blue(), part.path().display());
        return Ok(());
    }

    let logon = logon(global)?;
    let ctx = CommitContext {
        logon: &logon,
        users: &resources.users,
        props: &resources.props,
        modifier_template: &settings.save_modifier_by,
        allow_all_users: settings.restrictions.allow_all_users,
        allow_property_creation: settings.restrictions.allow_property_creation,
    };
    let report = session
        .commit(&mut part, &ctx)
        .map_err(|e| miette::miette!("{}", e))?;
    part.save().map_err(|e| miette::miette!("{}", e))?;

    eprintln!(
        "{} Saved {} to {}",
        style("✓").green(),
        style(&report.base_size).cyan(),
        style(part.path().display()).dim()
    );

    let store = AppDataStore::new(&data_dir(global)?);
    match store.bump() {
        Ok(counter) => {
            if settings.restrictions.enable_information {
                for msg in resources.info_messages(counter) {
                    eprintln!("{} {}", style("i").blue(), msg);
                }
            }
        }
        Err(e) => warn!(path = %store.path().display(), error = %e, "Cannot update usage counter"),
    }

    Ok(())
}
