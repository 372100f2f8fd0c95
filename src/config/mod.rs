pub mod document;
pub mod paths;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use document::{NetworkDocument, RawProfile};
pub use paths::AppPaths;

use crate::error::{AppError, AppResult};
use crate::registry::NetworkProfileRegistry;

/// Where the network profiles come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`; must exist.
    Explicit(PathBuf),
    /// Platform default; the built-in profiles apply when it is absent.
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Default(path) => path,
        }
    }
}

pub fn load_registry(source: &ConfigSource) -> AppResult<NetworkProfileRegistry> {
    match source {
        ConfigSource::Explicit(path) => {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            NetworkProfileRegistry::load(path)
        }
        ConfigSource::Default(path) if path.exists() => NetworkProfileRegistry::load(path),
        ConfigSource::Default(path) => {
            debug!(path = %path.display(), "no networks file, using built-in profiles");
            Ok(NetworkProfileRegistry::builtin())
        }
    }
}
