use anyhow::Context as _;
use eframe::egui;
use log::{error, info};

mod config;
mod ui;

use config::AppConfig;
use ui::SignupApp;

/// Load the configuration file, adding the location to any error
fn load_config() -> anyhow::Result<AppConfig> {
    let path = AppConfig::default_path();
    match path {
        Some(path) => AppConfig::load_from(&path)
            .with_context(|| format!("could not load configuration from {}", path.display())),
        None => {
            info!("No config directory available, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Signup Form egui application");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}; falling back to defaults", e);
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([520.0, 560.0])
            .with_title(config.window.title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            ui::setup_signup_style(&cc.egui_ctx);
            Ok(Box::new(SignupApp::new(config)))
        }),
    )
}
