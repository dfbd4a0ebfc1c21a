// main.rs - Game of Life viewer: window by default, headless on request

use anyhow::{Result, anyhow};
use clap::Parser;
use eframe::egui;
use tracing::info;

mod app;
mod config;
mod headless;

use app::ConwayViewer;
use config::ViewerConfig;

fn main() -> Result<()> {
    init_tracing();
    let config = ViewerConfig::parse();
    info!(size = config.size, cell_size = config.cell_size, "starting viewer");

    if let Some(frames) = config.headless {
        return headless::run(&config, frames);
    }

    let viewer = ConwayViewer::new(&config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(viewer.window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(viewer)),
    )
    .map_err(|err| anyhow!("viewer window failed: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
