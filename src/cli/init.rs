//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

use pingarr::config::Config;

/// Default configuration content for pingarr init
pub const DEFAULT_CONFIG: &str = r#"# pingarr configuration
# =====================
#
# pingarr manages your notification preferences on a media request server.
# Point it at your server and give it an API key; everything else is edited
# from the app itself.

[server]
# Base URL of the media request server
url = "http://localhost:5055"

# API key, found under the server's general settings
api_key = ""

# Numeric id of the user whose preferences are managed.
# Leave unset to manage the account that owns the API key.
# user_id = 1
"#;

/// Initialize a new pingarr configuration.
///
/// By default creates the global config at ~/.pingarr/config.toml;
/// use --config to specify a custom path.
pub fn init_command(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path
        .map(|p| p.to_path_buf())
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
