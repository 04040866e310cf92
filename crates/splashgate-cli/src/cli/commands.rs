use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available splashgate subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the development server
    ///
    /// Serves the project directory and answers the splash route with the
    /// document's current contents.
    Dev(DevArgs),

    /// Run a production build
    ///
    /// Runs the configured bundler command, then copies the splash document
    /// into the output directory. A failed copy is reported but does not fail
    /// the build.
    Build(BuildArgs),

    /// Validate configuration
    ///
    /// Checks splashgate.config.json and reports a missing splash document or
    /// alias directories.
    Check(CheckArgs),
}

/// Arguments for the dev command
#[derive(Args, Debug, Default)]
pub struct DevArgs {
    /// Port to listen on (default: server.port, 1420)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Host to bind (default: server.host, 127.0.0.1)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Fail if the port is taken instead of trying the next ones
    #[arg(long, conflicts_with = "no_strict_port")]
    pub strict_port: bool,

    /// Try up to 10 following ports if the port is taken
    #[arg(long)]
    pub no_strict_port: bool,
}

/// Arguments for the build command
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Output directory (default: outDir, "dist")
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Disable minification in the bundler
    #[arg(long)]
    pub no_minify: bool,

    /// Ask the bundler for source maps
    #[arg(long)]
    pub sourcemap: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Treat a missing splash document or alias directory as an error
    #[arg(long)]
    pub strict: bool,
}
