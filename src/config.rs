use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::state::items::ItemStore;
use crate::state::price::Dollars;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Address to listen on.
    pub host: String,

    /// HTTP port to listen on.
    pub port: u16,

    /// Log level for tracing (e.g. "info", "debug"). `RUST_LOG` overrides it.
    pub log_level: String,

    pub server_version: String,

    /// Items the store starts with, name → price.
    pub seed: BTreeMap<String, f64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            log_level: "info".into(),
            server_version: env!("CARGO_PKG_VERSION").into(),
            seed: BTreeMap::from([("shoes".into(), 50.0), ("socks".into(), 5.0)]),
        }
    }
}

impl AppConfig {
    /// Load `config.json` if present, otherwise fall back to defaults.
    pub fn load() -> Result<Self> {
        if Path::new(CONFIG_FILE).exists() {
            Self::load_from_file(CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let cfg = serde_json::from_str::<AppConfig>(&file)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;
        if let Some((name, price)) = self.seed.iter().find(|(_, p)| !p.is_finite()) {
            return Err(anyhow!("seed price for {name:?} is not a finite number: {price}"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    /// Build the store holding the configured seed items.
    pub fn seed_store(&self) -> ItemStore {
        ItemStore::with_items(
            self.seed
                .iter()
                .map(|(name, price)| (name.clone(), Dollars::new(*price))),
        )
    }
}
