//! Status command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

use pingarr::api::ApiClient;
use pingarr::config::Config;

/// Print the configured user's notification settings
pub fn status_command(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_from(config_path)?;

    if config.server.api_key.is_empty() {
        bail!(
            "No API key configured. Run `pingarr init` and set server.api_key in {}.",
            Config::global_config_path().display()
        );
    }

    let client = ApiClient::new(&config.server.url, &config.server.api_key);

    let user_id = match config.server.user_id {
        Some(id) => id,
        None => {
            client
                .current_user()
                .with_context(|| "Failed to resolve the current user")?
                .id
        }
    };

    let settings = client
        .notification_settings(user_id)
        .with_context(|| format!("Failed to fetch notification settings for user {user_id}"))?;

    if let Ok(public) = client.public_settings() {
        if let Some(title) = public.application_title {
            println!("Server: {} ({})", title, config.server.url);
        } else {
            println!("Server: {}", config.server.url);
        }
    } else {
        println!("Server: {}", config.server.url);
    }
    println!("User:   #{user_id}");
    println!();

    let agents = settings.agent_set();
    let enabled: Vec<String> = agents.iter().map(|a| a.to_string()).collect();
    println!(
        "Enabled channels: {}",
        if enabled.is_empty() {
            "none".to_string()
        } else {
            enabled.join(", ")
        }
    );
    println!();

    println!("Discord");
    println!("  mentions:     {}", on_off(settings.enable_discord));
    println!(
        "  user id:      {}",
        settings.discord_id.as_deref().unwrap_or("(not set)")
    );

    println!("Telegram");
    println!(
        "  chat id:      {}",
        settings.telegram_chat_id.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  send silently: {}",
        on_off(settings.telegram_send_silently)
    );

    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
