use std::path::PathBuf;

use crate::config::{self, AppPaths, ConfigSource};
use crate::error::AppResult;
use crate::output::Output;
use crate::registry::NetworkProfileRegistry;

#[derive(Debug)]
pub struct AppContext {
    pub source: ConfigSource,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let source = match config {
            Some(path) => ConfigSource::Explicit(path),
            None => ConfigSource::Default(AppPaths::discover()?.networks_file().to_path_buf()),
        };

        Ok(Self {
            source,
            output: Output::new(json),
        })
    }

    pub fn registry(&self) -> AppResult<NetworkProfileRegistry> {
        config::load_registry(&self.source)
    }
}
