mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::LaunchLensApp;
use eframe::egui;

/// Input read when no path is given on the command line.
const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATASET.to_string());

    let dataset = match data::loader::load_file(Path::new(&path)) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {path}: {e:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} launch records across {} sites from {path}",
        dataset.len(),
        dataset.sites.len()
    );
    if dataset.is_empty() {
        log::warn!("{path} contains no launch records");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Payload and Launch Outcome",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchLensApp::new(dataset)))),
    )
}
