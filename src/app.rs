use eframe::egui;

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{central, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesDashApp {
    pub state: AppState,
}

impl SalesDashApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for SalesDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, flow, cloud, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central::dashboard(ui, &self.state);
        });
    }
}
