use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    consts::DEFAULT_CONFIG_PATH,
    tokens::counters::{TokenCounter, default_counters},
};

/// State shared by every request handler. The configuration is loaded once
/// at startup and written back to `config_path` whenever a setting changes.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub config_path: Arc<Path>,
    pub counters: Arc<[Box<dyn TokenCounter>]>,
}

impl AppState {
    pub async fn try_new(config_path: Option<OsString>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(|| OsString::from(DEFAULT_CONFIG_PATH));
        let path = PathBuf::from(config_path);

        let config = Config::read_or_create(&path).await?;

        Ok(Self::new(config, path))
    }

    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            config_path: config_path.into(),
            counters: default_counters().into(),
        }
    }
}
