// src/main.rs
use std::sync::Arc;

use anyhow::Result;
use eframe::egui;

mod analysis;
mod api;
mod app;
mod config;
mod logging;
mod state;
mod ui;
mod utils;

use api::BreweryClient;
use app::BreweryApp;
use config::Settings;

fn main() -> Result<()> {
    let settings = Settings::load()?;
    logging::init(&settings.log_level);
    let settings = settings.normalized();

    let client = BreweryClient::new(settings.api_url()?, settings.request_timeout())?;
    tracing::info!(
        base_url = %client.base_url(),
        page_size = settings.page_size,
        "starting brewery dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Brewery Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Brewery Dashboard",
        options,
        Box::new(move |cc| {
            Box::new(BreweryApp::new(settings, Arc::new(client), Some(cc.egui_ctx.clone())))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
