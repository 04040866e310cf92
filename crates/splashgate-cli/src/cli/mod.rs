//! Command-line interface definition, using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `splashgate dev` - Development server with the splash route installed
//! - `splashgate build` - Run the bundler, then copy the splash document
//! - `splashgate check` - Validate configuration and report missing files

mod commands;
mod tests;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{BuildArgs, CheckArgs, Command, DevArgs};

/// splashgate - splash document delivery for bundled desktop apps
#[derive(Parser, Debug)]
#[command(
    name = "splashgate",
    version,
    about = "Serve a splash document in development and ship it with production builds",
    long_about = "splashgate hosts the splash plugin around your bundler.\n\
                  `dev` serves the project with the splash route answered from disk,\n\
                  `build` runs the bundler and copies the splash document into the output."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the config file (default: <cwd>/splashgate.config.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project directory (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
