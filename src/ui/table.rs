use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Dataset;
use crate::ui::format;

// ---------------------------------------------------------------------------
// Filtered records table
// ---------------------------------------------------------------------------

const HEADERS: [&str; 5] = ["Date", "Region", "Product", "Sales", "Quantity"];

/// Render the filtered records as a striped table, in source row order.
/// Scrolling is left to the surrounding dashboard scroll area.
pub fn records_table(ui: &mut Ui, dataset: &Dataset, indices: &[usize]) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(90.0), HEADERS.len())
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let rec = &dataset.records[indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(rec.date.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.region);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.product);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format::currency_cents(rec.sales));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format::thousands(rec.quantity));
                });
            });
        });
}
