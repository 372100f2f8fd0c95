use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "netprofiles",
    version,
    about = "Inspect blockchain network connection profiles"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Networks file to read (defaults to the platform config directory)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every profile
    List,
    /// Show one profile
    Get(ProfileArgs),
    /// Print the JSON-RPC endpoint of a profile
    Url(ProfileArgs),
    /// Check that a node answers on a profile's endpoint
    Check(CheckArgs),
    /// Write the built-in profiles to the networks file
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(long, default_value_t = 10, help = "Request timeout in seconds")]
    pub timeout: u64,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, help = "Overwrite an existing networks file")]
    pub force: bool,
}
