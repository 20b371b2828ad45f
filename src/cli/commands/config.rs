//! `basesize config` command - manage the configuration directory

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;

use crate::cli::helpers::load_resources;
use crate::cli::GlobalOpts;
use crate::core::config::config_dir;
use crate::defaults::{ConfigFile, DefaultRegistry};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the default configuration files
    Init(InitArgs),

    /// Print the configuration directory
    Path,

    /// Show where each configuration file is read from
    Show,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Init(args) => run_init(args, global),
        ConfigCommands::Path => run_path(global),
        ConfigCommands::Show => run_show(global),
    }
}

fn run_init(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let dir = config_dir(global.config_dir.as_deref()).map_err(|e| miette::miette!("{}", e))?;
    fs::create_dir_all(&dir).into_diagnostic()?;

    let registry = DefaultRegistry::new();
    let mut written = 0;
    for kind in ConfigFile::all() {
        let Some(content) = registry.get(*kind) else {
            continue;
        };
        let path = dir.join(kind.file_name());
        if path.exists() && !args.force {
            println!(
                "{} {} already exists (use --force to overwrite)",
                style("!").yellow(),
                path.display()
            );
            continue;
        }
        fs::write(&path, content).into_diagnostic()?;
        println!("{} Wrote {}", style("✓").green(), style(path.display()).dim());
        written += 1;
    }

    println!();
    println!(
        "Initialized {} file(s) in {}",
        style(written).cyan(),
        dir.display()
    );
    if !registry.has_default(ConfigFile::Users) && !dir.join(ConfigFile::Users.file_name()).exists() {
        println!(
            "Create {} to list the users allowed to save base sizes",
            style(ConfigFile::Users.file_name()).yellow()
        );
    }
    Ok(())
}

fn run_path(global: &GlobalOpts) -> Result<()> {
    let dir = config_dir(global.config_dir.as_deref()).map_err(|e| miette::miette!("{}", e))?;
    println!("{}", dir.display());
    Ok(())
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let (dir, resources) = load_resources(global)?;

    println!("{:<12} {}", style("Directory:").bold(), dir.display());
    for (kind, source) in resources.sources() {
        println!("{:<12} {}", style(format!("{}:", kind.as_str())).bold(), source);
    }
    println!();
    println!(
        "{} preset(s), {} process(es), {} user(s)",
        style(resources.presets.len()).cyan(),
        style(resources.processes.len()).cyan(),
        style(resources.users.len()).cyan()
    );
    if let Some(url) = &resources.settings.urls.help {
        println!("{:<12} {}", style("Help:").bold(), url);
    }
    Ok(())
}
