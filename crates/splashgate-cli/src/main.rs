//! splashgate CLI entry point: argument parsing, logging setup and command
//! dispatch.

use clap::Parser;
use miette::Result;
use splashgate_cli::{cli, commands, config::ConfigSource, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let source = ConfigSource::new(args.cwd, args.config);

    let result = match args.command {
        cli::Command::Dev(dev_args) => commands::dev_execute(dev_args, &source).await,
        cli::Command::Build(build_args) => commands::build_execute(build_args, &source).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args, &source).await,
    };

    // Convert CLI errors to miette diagnostics for rendering
    result.map_err(error::cli_error_to_miette)
}
