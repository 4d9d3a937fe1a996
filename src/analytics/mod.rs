/// Analytics layer: the pure filter-and-aggregate pipeline.
///
/// Everything in here is a total function of `(Dataset, FilterSelection)`;
/// the UI recomputes one [`DashboardView`] per control change and renders
/// from it. No hidden state, no caching beyond that single value.

pub mod aggregate;
pub mod flow;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::Dataset;

use aggregate::Kpis;
use flow::FlowGraph;

// ---------------------------------------------------------------------------
// DashboardView – everything the UI needs for one frame of the dashboard
// ---------------------------------------------------------------------------

/// All derived views for the current filter selection.
#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    /// Indices of records passing the filters, in source row order.
    pub indices: Vec<usize>,
    pub kpis: Kpis,
    /// (date, summed sales), ascending by date.
    pub time_series: Vec<(NaiveDate, f64)>,
    /// (region, summed sales) in the dataset's region order.
    pub region_totals: Vec<(String, f64)>,
    /// Raw per-record (product, sales) pairs for the distribution pie.
    pub product_pairs: Vec<(String, f64)>,
    /// product → summed sales for the tag cloud.
    pub product_frequency: BTreeMap<String, f64>,
    pub flow: FlowGraph,
}

impl DashboardView {
    /// Run the whole pipeline: filter, aggregate, build the flow graph.
    pub fn compute(dataset: &Dataset, selection: &FilterSelection) -> Self {
        let indices = filtered_indices(dataset, selection);
        DashboardView {
            kpis: aggregate::kpis(dataset, &indices),
            time_series: aggregate::time_series(dataset, &indices),
            region_totals: aggregate::region_totals(dataset, &indices),
            product_pairs: aggregate::product_pairs(dataset, &indices),
            product_frequency: aggregate::product_frequency(dataset, &indices),
            flow: flow::build_flow(dataset, &indices),
            indices,
        }
    }

    /// Whether the current selection matches no records at all.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
