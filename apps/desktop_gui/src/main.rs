mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    config::{CliArgs, StartupConfig},
    ui::{
        theme::{PersistedUiSettings, SETTINGS_STORAGE_KEY},
        PizzaApp,
    },
};

const APP_ID: &str = "bloom_pizza";

fn init_tracing(config: &StartupConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();
    let config = StartupConfig::load(&cli).context("failed to load startup config")?;
    init_tracing(&config);
    tracing::info!(
        theme = ?config.theme,
        home_image = ?config.home_image,
        "starting Bloom Pizza"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.window_title)
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| {
            let persisted_settings = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| PersistedUiSettings::from_json(&text))
            });
            Ok(Box::new(PizzaApp::new(
                &cc.egui_ctx,
                &config,
                persisted_settings,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("gui event loop failed: {err}"))
}
