use eframe::egui::{
    epaint::CubicBezierShape, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2,
};

use crate::analytics::flow::FlowGraph;
use crate::color::CategoryColors;

// ---------------------------------------------------------------------------
// Region → Product flow diagram (sankey-style painter)
// ---------------------------------------------------------------------------

const NODE_WIDTH: f32 = 14.0;
const NODE_GAP: f32 = 10.0;
const LABEL_GUTTER: f32 = 110.0;

/// Draw the flow diagram: region node bars on the left, product node bars on
/// the right, one ribbon per edge with thickness proportional to its weight.
///
/// Callers must skip this for an empty graph; there is nothing meaningful to
/// draw without nodes.
pub fn flow_diagram(ui: &mut Ui, graph: &FlowGraph, region_colors: &CategoryColors) {
    debug_assert!(!graph.is_empty());

    let height = 320.0_f32;
    let (rect, _) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(rect);

    let total: f64 = graph.edges.iter().map(|e| e.weight).sum();

    // Per-node throughput; each edge counts once on each side.
    let mut throughput = vec![0.0f64; graph.node_count()];
    for e in &graph.edges {
        throughput[e.source] += e.weight;
        throughput[e.target] += e.weight;
    }

    let r = graph.region_count;
    let left_nodes: Vec<usize> = (0..r).collect();
    let right_nodes: Vec<usize> = (r..graph.node_count()).collect();

    let left_x = rect.left() + LABEL_GUTTER;
    let right_x = rect.right() - LABEL_GUTTER - NODE_WIDTH;

    let left_spans = side_layout(&left_nodes, &throughput, total, rect.top(), height);
    let right_spans = side_layout(&right_nodes, &throughput, total, rect.top(), height);

    // ---- Ribbons first, so node bars paint over their ends ----
    let mut src_offset = vec![0.0f32; graph.node_count()];
    let mut dst_offset = vec![0.0f32; graph.node_count()];
    for e in &graph.edges {
        let (src_top, src_h) = left_spans[e.source];
        let (dst_top, dst_h) = right_spans[e.target - r];
        let frac_src = weight_fraction(e.weight, throughput[e.source]);
        let frac_dst = weight_fraction(e.weight, throughput[e.target]);
        let t_src = src_h * frac_src;
        let t_dst = dst_h * frac_dst;

        let start = Pos2::new(left_x + NODE_WIDTH, src_top + src_offset[e.source] + t_src / 2.0);
        let end = Pos2::new(right_x, dst_top + dst_offset[e.target] + t_dst / 2.0);
        src_offset[e.source] += t_src;
        dst_offset[e.target] += t_dst;

        let mid_x = (start.x + end.x) / 2.0;
        let color = region_colors
            .color_for(&graph.labels[e.source])
            .gamma_multiply(0.45);
        let width = t_src.min(t_dst).max(1.0);
        painter.add(Shape::CubicBezier(CubicBezierShape::from_points_stroke(
            [
                start,
                Pos2::new(mid_x, start.y),
                Pos2::new(mid_x, end.y),
                end,
            ],
            false,
            Color32::TRANSPARENT,
            Stroke::new(width, color),
        )));
    }

    // ---- Node bars and labels ----
    for (&node, &(top, h)) in left_nodes.iter().zip(&left_spans) {
        let bar = eframe::egui::Rect::from_min_size(
            Pos2::new(left_x, top),
            Vec2::new(NODE_WIDTH, h),
        );
        painter.rect_filled(bar, 2.0, region_colors.color_for(&graph.labels[node]));
        painter.text(
            Pos2::new(left_x - 6.0, top + h / 2.0),
            Align2::RIGHT_CENTER,
            &graph.labels[node],
            FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
    }
    for (&node, &(top, h)) in right_nodes.iter().zip(&right_spans) {
        let bar = eframe::egui::Rect::from_min_size(
            Pos2::new(right_x, top),
            Vec2::new(NODE_WIDTH, h),
        );
        painter.rect_filled(bar, 2.0, Color32::from_gray(120));
        painter.text(
            Pos2::new(right_x + NODE_WIDTH + 6.0, top + h / 2.0),
            Align2::LEFT_CENTER,
            &graph.labels[node],
            FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
    }
}

/// Stack one side's nodes vertically, heights proportional to throughput.
/// Returns (top, height) per node in the given order.
fn side_layout(
    nodes: &[usize],
    throughput: &[f64],
    total: f64,
    top: f32,
    height: f32,
) -> Vec<(f32, f32)> {
    let usable = height - NODE_GAP * nodes.len().saturating_sub(1) as f32;
    let mut y = top;
    nodes
        .iter()
        .map(|&n| {
            let frac = if total > 0.0 {
                (throughput[n] / total) as f32
            } else {
                1.0 / nodes.len() as f32
            };
            let h = (usable * frac).max(4.0);
            let span = (y, h);
            y += h + NODE_GAP;
            span
        })
        .collect()
}

/// Fraction of a node's throughput carried by one edge. Falls back to an even
/// share when every weight on the node is zero.
fn weight_fraction(weight: f64, node_total: f64) -> f32 {
    if node_total > 0.0 {
        (weight / node_total) as f32
    } else {
        1.0
    }
}
