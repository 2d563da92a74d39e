mod app;
mod color;
mod config;
mod data;
mod sim;
mod state;
#[cfg(test)]
mod testutil;
mod ui;

use std::path::Path;

use app::BiasViewerApp;
use config::ViewerConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::load_or_default(Path::new("."));
    log::info!("Reading artifacts from {}", config.artifact_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bias Analysis",
        options,
        Box::new(|_cc| Ok(Box::new(BiasViewerApp::new(config)))),
    )
}
