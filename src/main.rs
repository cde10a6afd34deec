//! Native entry point for the cloudpane viewer.
//!
//! Run with: cargo run
//! Override the per-cloud point count with CLOUDPANE_POINTS.

use eframe::egui;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cloudpane::app::ViewerApp;
use cloudpane::viewer::{Viewer, DEFAULT_NUM_POINTS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cloudpane=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let num_points = std::env::var("CLOUDPANE_POINTS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_NUM_POINTS);
    info!(num_points, "Starting viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "cloudpane",
        options,
        Box::new(move |cc| {
            let viewer = Viewer::new(num_points)?;
            Ok(Box::new(ViewerApp::new(cc, viewer)))
        }),
    )?;
    Ok(())
}
