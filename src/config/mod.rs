//! Configuration loading and management

mod io;
mod server;

pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Main configuration structure, stored at `~/.pingarr/config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Media request server connection
    #[serde(default)]
    pub server: ServerConfig,
}
