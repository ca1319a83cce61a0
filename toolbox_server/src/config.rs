use std::path::Path;

use anyhow::{Context as _, Result};
use diff_config::DiffConfig;
use log::info;
use serde::{Deserialize, Serialize};
use server_config::ServerConfig;
use tokio::fs;
use ui_config::UiConfig;

pub mod diff_config;
pub mod server_config;
pub mod ui_config;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub diff: DiffConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads the configuration at `path` or falls back to the defaults, then
    /// writes it back so the file always lists every setting.
    pub async fn read_or_create(path: &Path) -> Result<Self> {
        let config = if fs::try_exists(path).await.unwrap_or(false) {
            info!("Loading configuration from '{}'", path.display());
            Self::load_from_file(path).await?
        } else {
            Self::default()
        };

        config.write(path).await?;
        info!("Updated configuration at '{}'", path.display());

        Ok(config)
    }

    pub async fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).await.with_context(|| {
            format!(
                "Cannot load configuration from disk from {}",
                path.display()
            )
        })?;

        let config = serde_yaml::from_str(&contents).context("Failed to parse configuration")?;

        Ok(config)
    }

    pub async fn write(&self, path: &Path) -> Result<()> {
        let contents = serde_yaml::to_string(&self).context("Failed to serialize configuration")?;

        fs::write(path, contents)
            .await
            .context("Failed to write configuration to disk")
    }
}
