mod analytics;
mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use app::SalesDashApp;
use eframe::egui;

/// Source file location, fixed at build time.
const DATA_PATH: &str = "sales_data.csv";

fn main() -> Result<()> {
    env_logger::init();

    // Load once, up front. A LoadError is fatal and aborts startup with a
    // blocking message; the dataset is read-only for the rest of the session.
    let path = Path::new(DATA_PATH);
    let dataset = data::loader::load_csv(path)
        .with_context(|| format!("loading sales data from {}", path.display()))?;
    log::info!(
        "Loaded {} records ({} regions, {} products, {} – {})",
        dataset.len(),
        dataset.regions.len(),
        dataset.products.len(),
        dataset.date_min,
        dataset.date_max,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(SalesDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
