//! Configuration loading for the inventory screen.
//!
//! The file lives at `<config_dir>/vaxdesk/config.toml`. A missing file
//! yields the defaults; CLI flags are applied on top by the binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, GatewayConfig, UiConfig};
