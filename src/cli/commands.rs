use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gm",
    about = concat!("[*] gamify v", env!("CARGO_PKG_VERSION"), " - level up your to-do list"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log file (default: gamify.log in the temp directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an intent script against a fresh board and print the result
    Replay(ReplayArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, or `-` for stdin
    pub script: String,
}
