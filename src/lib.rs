pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod rpc;

use cli::Cli;
use error::AppResult;

pub use registry::{NetworkId, NetworkProfile, NetworkProfileRegistry, RegistryError};

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
