use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// FlowGraph – bipartite Region → Product structure
// ---------------------------------------------------------------------------

/// One weighted connection from a region node to a product node.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    /// Index into [`FlowGraph::labels`] (a region node).
    pub source: usize,
    /// Index into [`FlowGraph::labels`] (a product node).
    pub target: usize,
    /// The originating record's sales value.
    pub weight: f64,
}

/// Indexed bipartite node/edge structure for the Region → Product flow
/// diagram. Node indices are stable within one computation only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    /// Region labels first, then product labels. Disjoint label spaces: a
    /// string appearing as both region and product gets two nodes.
    pub labels: Vec<String>,
    /// How many leading entries of `labels` are regions.
    pub region_count: usize,
    /// One edge per filtered record, in row order. Parallel edges between the
    /// same pair are kept separate, not merged.
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the flow graph from the filtered view.
///
/// Regions seen in the view get indices `0..R` in first-occurrence order,
/// products get `R..R+P` likewise; every record then contributes one edge
/// `(region index, product index, sales)`. An empty view yields an empty
/// graph, which the flow panel renders as a placeholder rather than a
/// degenerate diagram.
pub fn build_flow(dataset: &Dataset, indices: &[usize]) -> FlowGraph {
    let mut regions: Vec<String> = Vec::new();
    let mut products: Vec<String> = Vec::new();
    for &i in indices {
        let rec = &dataset.records[i];
        if !regions.iter().any(|r| r == &rec.region) {
            regions.push(rec.region.clone());
        }
        if !products.iter().any(|p| p == &rec.product) {
            products.push(rec.product.clone());
        }
    }

    let region_count = regions.len();
    let edges = indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            // Both positions exist; the labels were collected from this view.
            let source = regions.iter().position(|r| r == &rec.region).unwrap_or(0);
            let target = products.iter().position(|p| p == &rec.product).unwrap_or(0);
            FlowEdge {
                source,
                target: region_count + target,
                weight: rec.sales,
            }
        })
        .collect();

    let mut labels = regions;
    labels.extend(products);

    FlowGraph {
        labels,
        region_count,
        edges,
    }
}
