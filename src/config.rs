use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4221";

/// Process-wide settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Root for `/files/<name>`. Empty means the working directory.
    pub files_directory: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            files_directory: PathBuf::new(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the `LISTEN` and `FILES_DIR` environment
    /// variables.
    pub fn load() -> Self {
        Self::default().with_env()
    }

    pub fn from_yaml_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    fn with_env(mut self) -> Self {
        if let Ok(addr) = std::env::var("LISTEN") {
            self.listen_addr = addr;
        }
        if let Ok(dir) = std::env::var("FILES_DIR") {
            self.files_directory = PathBuf::from(dir);
        }
        self
    }
}

/// Command-line flags. Each one overrides the config file and environment.
#[derive(Debug, Parser)]
#[command(name = "petrel", about = "Minimal HTTP/1.1 file and echo server")]
pub struct Cli {
    /// Directory served under /files/
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    pub listen: Option<String>,

    /// YAML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<ServerConfig> {
        let mut cfg = match &self.config {
            Some(path) => ServerConfig::from_yaml_file(path)?,
            None => ServerConfig::default(),
        }
        .with_env();

        if let Some(dir) = self.directory {
            cfg.files_directory = dir;
        }
        if let Some(addr) = self.listen {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }
}
