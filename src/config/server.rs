//! Server connection settings

use serde::{Deserialize, Serialize};

/// Connection to the media request server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "http://localhost:5055")
    #[serde(default = "default_server_url")]
    pub url: String,

    /// API key, found under the server's general settings
    #[serde(default)]
    pub api_key: String,

    /// Numeric id of the user whose preferences are managed.
    ///
    /// When unset, the id is resolved through the server's auth endpoint
    /// for the account owning the API key.
    #[serde(default)]
    pub user_id: Option<u64>,
}

fn default_server_url() -> String {
    "http://localhost:5055".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            api_key: String::new(),
            user_id: None,
        }
    }
}
