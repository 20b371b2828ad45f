use basesize::cli::{logging, Cli, Commands};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    let global = cli.global;

    match cli.command {
        Commands::Calc(args) => basesize::cli::commands::calc::run(args, &global),
        Commands::Apply(args) => basesize::cli::commands::apply::run(args, &global),
        Commands::Presets(cmd) => basesize::cli::commands::presets::run(cmd, &global),
        Commands::Check(args) => basesize::cli::commands::check::run(args, &global),
        Commands::Config(cmd) => basesize::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => basesize::cli::commands::completions::run(args),
    }
}
