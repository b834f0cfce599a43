//! Command-line surface.
//!
//! Usage:
//!   vaxdesk [--config <path>] [--base-url <url>]

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Terminal admin screen for the vaccine inventory.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "vaxdesk", version, about = "Manage vaccine inventory records")]
pub struct Cli {
    /// Path to a config file (defaults to the per-user config location).
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the config file.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Load the config this invocation points at.
    ///
    /// An explicit `--config` must exist; the default location may be absent.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.gateway.base_url = base_url.clone();
        }
    }
}
