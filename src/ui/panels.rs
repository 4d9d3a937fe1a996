use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: region and product multiselects plus the
/// date-range pickers.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Data");
    ui.separator();

    // Clone the label lists so we can mutate state inside the loops.
    let regions = state.dataset.regions.clone();
    let products = state.dataset.products.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Region multiselect ----
            facet_header(ui, "Region", state.selection.regions.len(), regions.len(), |ui| {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        state.select_all_regions();
                    }
                    if ui.small_button("None").clicked() {
                        state.select_no_regions();
                    }
                });
                for region in &regions {
                    let mut checked = state.selection.regions.contains(region);
                    let text =
                        RichText::new(region).color(state.region_colors.color_for(region));
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_region(region);
                    }
                }
            });

            // ---- Product multiselect ----
            facet_header(ui, "Product", state.selection.products.len(), products.len(), |ui| {
                ui.horizontal(|ui: &mut Ui| {
                    if ui.small_button("All").clicked() {
                        state.select_all_products();
                    }
                    if ui.small_button("None").clicked() {
                        state.select_no_products();
                    }
                });
                for product in &products {
                    let mut checked = state.selection.products.contains(product);
                    let text =
                        RichText::new(product).color(state.product_colors.color_for(product));
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_product(product);
                    }
                }
            });

            // ---- Date range ----
            ui.add_space(4.0);
            ui.strong("Date Range");
            ui.horizontal(|ui: &mut Ui| {
                ui.label("From");
                let mut start = state.selection.start;
                if ui
                    .add(DatePickerButton::new(&mut start).id_salt("start_date"))
                    .changed()
                {
                    state.set_start_date(start);
                }
            });
            ui.horizontal(|ui: &mut Ui| {
                ui.label("To");
                let mut end = state.selection.end;
                if ui
                    .add(DatePickerButton::new(&mut end).id_salt("end_date"))
                    .changed()
                {
                    state.set_end_date(end);
                }
            });
            ui.weak(format!(
                "Data covers {} – {}",
                state.dataset.date_min, state.dataset.date_max
            ));
        });
}

/// Collapsible facet section with a `(selected/total)` count in the header.
fn facet_header(
    ui: &mut Ui,
    name: &str,
    n_selected: usize,
    n_total: usize,
    add_contents: impl FnOnce(&mut Ui),
) {
    let header_text = format!("{name}  ({n_selected}/{n_total})");
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(name)
        .default_open(true)
        .show(ui, add_contents);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Sales Dashboard");
        ui.separator();
        ui.label(format!(
            "{} records loaded, {} matching filters",
            state.dataset.len(),
            state.view.indices.len()
        ));
    });
}
