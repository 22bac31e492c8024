use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "gmail-digest";

/// Filesystem layout: profile settings under the user config dir, tokens
/// under the user data dir, both namespaced by [`APP_DIR`].
#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
    profiles_dir: PathBuf,
    tokens_dir: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let config_dir = resolve_root(dirs::config_dir(), "config")?;
        let data_dir = resolve_root(dirs::data_dir(), "data")?;

        let profiles_dir = config_dir.join("profiles");
        let tokens_dir = data_dir.join("tokens");
        fs::create_dir_all(&profiles_dir)?;
        fs::create_dir_all(&tokens_dir)?;

        Ok(Self {
            config_dir,
            data_dir,
            profiles_dir,
            tokens_dir,
        })
    }

    pub fn settings_file(&self, profile: &str) -> PathBuf {
        self.profiles_dir.join(format!("{profile}.json"))
    }

    pub fn token_file(&self, profile: &str) -> PathBuf {
        self.tokens_dir.join(format!("{profile}.json"))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn resolve_root(root: Option<PathBuf>, kind: &str) -> AppResult<PathBuf> {
    root.map(|root| root.join(APP_DIR))
        .ok_or_else(|| AppError::Config(format!("unable to resolve {kind} directory")))
}
