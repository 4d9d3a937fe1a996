use std::collections::BTreeMap;

use eframe::egui::{RichText, Ui};

use crate::color::CategoryColors;

// ---------------------------------------------------------------------------
// Product tag cloud – frequency-weighted labels
// ---------------------------------------------------------------------------

const MIN_SIZE: f32 = 14.0;
const MAX_SIZE: f32 = 34.0;

/// Wrap-layout the product labels, font size scaled linearly between the
/// smallest and largest summed sales. Callers must skip this for an empty
/// mapping and show a placeholder instead.
pub fn tag_cloud(ui: &mut Ui, frequency: &BTreeMap<String, f64>, colors: &CategoryColors) {
    debug_assert!(!frequency.is_empty());

    let max = frequency.values().cloned().fold(f64::MIN, f64::max);
    let min = frequency.values().cloned().fold(f64::MAX, f64::min);
    let span = max - min;

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 14.0;
        for (label, &weight) in frequency {
            let t = if span.abs() < f64::EPSILON {
                1.0
            } else {
                ((weight - min) / span) as f32
            };
            let size = MIN_SIZE + (MAX_SIZE - MIN_SIZE) * t;
            ui.label(
                RichText::new(label)
                    .size(size)
                    .strong()
                    .color(colors.color_for(label)),
            )
            .on_hover_text(format!("{label}: {:.0}", weight));
        }
    });
}
