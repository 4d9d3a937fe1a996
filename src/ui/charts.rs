use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, RichText, Ui, Vec2};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::analytics::aggregate::Kpis;
use crate::color::CategoryColors;
use crate::ui::format;

// ---------------------------------------------------------------------------
// KPI tiles
// ---------------------------------------------------------------------------

/// Three KPI tiles: total sales, total quantity, average order value.
pub fn kpi_row(ui: &mut Ui, kpis: &Kpis) {
    ui.columns(3, |cols: &mut [Ui]| {
        kpi_tile(&mut cols[0], "Total Sales", format::currency_whole(kpis.total_sales));
        kpi_tile(
            &mut cols[1],
            "Total Quantity",
            format::thousands(kpis.total_quantity),
        );
        kpi_tile(
            &mut cols[2],
            "Avg. Order Value",
            format::currency_cents(kpis.avg_order_value),
        );
    });
}

fn kpi_tile(ui: &mut Ui, title: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.set_min_size(Vec2::new(ui.available_width(), 56.0));
        ui.vertical(|ui: &mut Ui| {
            ui.weak(title);
            ui.label(RichText::new(value).heading().strong());
        });
    });
}

// ---------------------------------------------------------------------------
// Sales over time – line plot
// ---------------------------------------------------------------------------

/// Time-series line with per-date markers. X values are days-from-CE so the
/// axis formatter can map grid marks back to calendar dates.
pub fn time_series_plot(ui: &mut Ui, series: &[(NaiveDate, f64)]) {
    let coords: Vec<[f64; 2]> = series
        .iter()
        .map(|(date, sales)| [date.num_days_from_ce() as f64, *sales])
        .collect();

    Plot::new("sales_over_time")
        .height(240.0)
        .y_axis_label("Sales")
        .x_axis_formatter(|mark, _range| {
            NaiveDate::from_num_days_from_ce_opt(mark.value.round() as i32)
                .map(|d| d.format("%b %d").to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(coords.clone()))
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0)
                    .name("Sales"),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(coords))
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );
        });
}

// ---------------------------------------------------------------------------
// Sales by region – bar chart
// ---------------------------------------------------------------------------

/// One bar per region, in dataset region order, coloured per label.
pub fn region_bars(ui: &mut Ui, totals: &[(String, f64)], colors: &CategoryColors) {
    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, (region, sum))| {
            Bar::new(i as f64, *sum)
                .name(region)
                .fill(colors.color_for(region))
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = totals.iter().map(|(r, _)| r.clone()).collect();

    Plot::new("sales_by_region")
        .height(240.0)
        .y_axis_label("Sales")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-3 && i >= 0.0 {
                labels.get(i as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Sales distribution by product – pie
// ---------------------------------------------------------------------------

/// Pie of the product sales distribution. Takes the raw per-record
/// (product, sales) pairs and computes the proportions itself.
pub fn product_pie(ui: &mut Ui, pairs: &[(String, f64)], colors: &CategoryColors) {
    use std::collections::BTreeMap;

    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for (product, sales) in pairs {
        *sums.entry(product.as_str()).or_default() += sales;
    }
    let total: f64 = sums.values().sum();
    if total <= 0.0 {
        ui.weak("All sales amounts are zero for the current filters.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        draw_pie(ui, &sums, total, colors);
        ui.add_space(12.0);
        ui.vertical(|ui: &mut Ui| {
            for (product, sum) in &sums {
                let pct = 100.0 * sum / total;
                ui.label(
                    RichText::new(format!("{product}  {pct:.1}%"))
                        .color(colors.color_for(product)),
                );
            }
        });
    });
}

fn draw_pie(
    ui: &mut Ui,
    sums: &std::collections::BTreeMap<&str, f64>,
    total: f64,
    colors: &CategoryColors,
) {
    use eframe::egui::{Pos2, Sense, Shape, Stroke};

    let side = 220.0_f32;
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = side * 0.45;

    let mut angle = -std::f32::consts::FRAC_PI_2;
    for (product, sum) in sums {
        let sweep = (sum / total) as f32 * std::f32::consts::TAU;
        // Fan of points approximating the arc, ~3 degrees per step.
        let steps = (sweep / 0.05).ceil().max(1.0) as usize;
        let mut points = vec![center];
        for k in 0..=steps {
            let a = angle + sweep * k as f32 / steps as f32;
            points.push(Pos2::new(
                center.x + radius * a.cos(),
                center.y + radius * a.sin(),
            ));
        }
        painter.add(Shape::convex_polygon(
            points,
            colors.color_for(product),
            Stroke::NONE,
        ));
        angle += sweep;
    }
}
