mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::LaunchDashApp;
use eframe::egui;

/// Dataset read at startup unless `LAUNCHDASH_DATA` points elsewhere.
const DEFAULT_DATA_PATH: &str = "data/launch_records.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::var_os("LAUNCHDASH_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let dataset = data::loader::load_file(&path)
        .with_context(|| format!("loading launch records from {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} contains no launch records", path.display());
    }
    log::info!(
        "Loaded {} launch records across {} sites",
        dataset.len(),
        dataset.sites.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("starting UI: {e}"))
}
