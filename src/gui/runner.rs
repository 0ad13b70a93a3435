//! GUI runner - launches the pingarr desktop app
//!
//! Wires the config, the sync worker channels, and the eframe window.

use anyhow::Result;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use tracing::{info, warn};

use crate::api::{start_sync_worker, ApiClient, SyncEvent, SyncRequest};
use crate::config::Config;

use super::app::PingarrApp;

/// Run the desktop app
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config = match Config::load_from(config_override.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            warn!("[pingarr] Failed to load config: {}. Falling back to defaults.", e);
            Config::default()
        }
    };

    if config.server.api_key.is_empty() {
        warn!(
            "[pingarr] No API key configured; requests will be rejected. \
             Set server.api_key in {}.",
            Config::global_config_path().display()
        );
    }

    info!("[pingarr] Connecting to {}", config.server.url);

    let client = ApiClient::new(&config.server.url, &config.server.api_key);

    // Request/event channels between the GUI and the sync worker
    let (request_tx, request_rx): (mpsc::Sender<SyncRequest>, mpsc::Receiver<SyncRequest>) =
        mpsc::channel();
    let (event_tx, event_rx): (mpsc::Sender<SyncEvent>, mpsc::Receiver<SyncEvent>) =
        mpsc::channel();

    start_sync_worker(client, request_rx, event_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 540.0])
            .with_min_inner_size([460.0, 420.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = PingarrApp::new(&config, request_tx, event_rx);

    eframe::run_native("pingarr", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
