use eframe::egui::{RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, cloud, flow, table};

// ---------------------------------------------------------------------------
// Central panel – KPI tiles, charts, flow diagram, cloud, table
// ---------------------------------------------------------------------------

/// Render the whole dashboard body from the current view.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            charts::kpi_row(ui, &state.view.kpis);

            section(ui, "Sales Over Time", state.view.time_series.is_empty(), |ui| {
                charts::time_series_plot(ui, &state.view.time_series);
            });

            section(ui, "Sales by Region", state.view.region_totals.is_empty(), |ui| {
                charts::region_bars(ui, &state.view.region_totals, &state.region_colors);
            });

            section(
                ui,
                "Sales Distribution by Product",
                state.view.product_pairs.is_empty(),
                |ui| {
                    charts::product_pie(ui, &state.view.product_pairs, &state.product_colors);
                },
            );

            section(
                ui,
                "Sales Flow: Region → Product",
                state.view.flow.is_empty(),
                |ui| {
                    flow::flow_diagram(ui, &state.view.flow, &state.region_colors);
                },
            );

            section(
                ui,
                "Product Cloud",
                state.view.product_frequency.is_empty(),
                |ui| {
                    cloud::tag_cloud(ui, &state.view.product_frequency, &state.product_colors);
                },
            );

            section(ui, "Filtered Sales Data", state.view.is_empty(), |ui| {
                table::records_table(ui, &state.dataset, &state.view.indices);
            });
        });
}

/// A titled section that substitutes a placeholder when its view is empty
/// instead of drawing a degenerate chart.
fn section(ui: &mut Ui, title: &str, empty: bool, add_contents: impl FnOnce(&mut Ui)) {
    ui.add_space(10.0);
    ui.separator();
    ui.heading(title);
    ui.add_space(4.0);
    if empty {
        no_data(ui);
    } else {
        add_contents(ui);
    }
}

fn no_data(ui: &mut Ui) {
    ui.label(RichText::new("No data for the current filters.").italics().weak());
}
