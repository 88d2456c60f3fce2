//! Alert Forge - a joke generator for fake system error dialogs
//!
//! Architecture:
//! - Main thread: runs the egui UI (form, page, modal alert)
//! - Audio thread: one per alert, plays the cue through a system player
//! - Playback outcomes come back to the UI over a crossbeam channel

use alert_forge::app::{AlertForgeApp, APP_TITLE};
use alert_forge::config;
use alert_forge::logging;
use eframe::egui;
use tracing::{info, warn};

fn main() -> eframe::Result<()> {
    let (config, config_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };

    logging::init(&config.log_level);
    if let Some(e) = config_error {
        warn!("Using default configuration: {}", e);
    }
    info!("Starting {}", APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(AlertForgeApp::new(cc, &config)))),
    )
}
