use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "netprofiles";
const NETWORKS_FILE: &str = "networks.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    networks_file: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        Ok(Self::under(config_root.join(APP_DIR)))
    }

    pub fn under(config_dir: PathBuf) -> Self {
        let networks_file = config_dir.join(NETWORKS_FILE);
        Self {
            config_dir,
            networks_file,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn networks_file(&self) -> &Path {
        &self.networks_file
    }
}
