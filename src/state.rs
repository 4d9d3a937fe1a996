use chrono::NaiveDate;

use crate::analytics::DashboardView;
use crate::color::CategoryColors;
use crate::data::filter::FilterSelection;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is injected once at startup and stays read-only; everything
/// else is derived from it and the current [`FilterSelection`].
pub struct AppState {
    /// Loaded dataset, read-only for the life of the process.
    pub dataset: Dataset,

    /// Current facet selections.
    pub selection: FilterSelection,

    /// Derived views for the current selection (cached, rebuilt on change).
    pub view: DashboardView,

    /// Colours per region label, shared across charts.
    pub region_colors: CategoryColors,

    /// Colours per product label, shared across charts.
    pub product_colors: CategoryColors,
}

impl AppState {
    /// Ingest the loaded dataset with the default all-inclusive selection.
    pub fn new(dataset: Dataset) -> Self {
        let selection = FilterSelection::all(&dataset);
        let view = DashboardView::compute(&dataset, &selection);
        let region_colors = CategoryColors::new(&dataset.regions);
        let product_colors = CategoryColors::new(&dataset.products);
        AppState {
            dataset,
            selection,
            view,
            region_colors,
            product_colors,
        }
    }

    /// Recompute the cached view after a selection change.
    pub fn refilter(&mut self) {
        self.view = DashboardView::compute(&self.dataset, &self.selection);
    }

    /// Toggle a single region in the filter.
    pub fn toggle_region(&mut self, region: &str) {
        if !self.selection.regions.remove(region) {
            self.selection.regions.insert(region.to_string());
        }
        self.refilter();
    }

    /// Toggle a single product in the filter.
    pub fn toggle_product(&mut self, product: &str) {
        if !self.selection.products.remove(product) {
            self.selection.products.insert(product.to_string());
        }
        self.refilter();
    }

    /// Select all regions.
    pub fn select_all_regions(&mut self) {
        self.selection.regions = self.dataset.regions.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect all regions.
    pub fn select_no_regions(&mut self) {
        self.selection.regions.clear();
        self.refilter();
    }

    /// Select all products.
    pub fn select_all_products(&mut self) {
        self.selection.products = self.dataset.products.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect all products.
    pub fn select_no_products(&mut self) {
        self.selection.products.clear();
        self.refilter();
    }

    /// Set the inclusive start of the date range. Keeps start ≤ end.
    pub fn set_start_date(&mut self, start: NaiveDate) {
        self.selection.start = start;
        if self.selection.end < start {
            self.selection.end = start;
        }
        self.refilter();
    }

    /// Set the inclusive end of the date range. Keeps start ≤ end.
    pub fn set_end_date(&mut self, end: NaiveDate) {
        self.selection.end = end;
        if self.selection.start > end {
            self.selection.start = end;
        }
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        let rec = |date: &str, region: &str, product: &str| Record {
            date: date.parse().unwrap(),
            region: region.into(),
            product: product.into(),
            sales: 10.0,
            quantity: 1,
        };
        Dataset::from_records(vec![
            rec("2024-01-01", "East", "Widget"),
            rec("2024-01-05", "West", "Gadget"),
        ])
        .unwrap()
    }

    #[test]
    fn starts_with_everything_visible() {
        let state = AppState::new(dataset());
        assert_eq!(state.view.indices, vec![0, 1]);
        assert_eq!(state.selection.start, "2024-01-01".parse().unwrap());
        assert_eq!(state.selection.end, "2024-01-05".parse().unwrap());
    }

    #[test]
    fn toggling_a_region_refilters() {
        let mut state = AppState::new(dataset());
        state.toggle_region("West");
        assert_eq!(state.view.indices, vec![0]);
        state.toggle_region("West");
        assert_eq!(state.view.indices, vec![0, 1]);
    }

    #[test]
    fn select_none_then_all_roundtrips() {
        let mut state = AppState::new(dataset());
        state.select_no_products();
        assert!(state.view.is_empty());
        assert_eq!(state.view.kpis.total_sales, 0.0);
        state.select_all_products();
        assert_eq!(state.view.indices, vec![0, 1]);
    }

    #[test]
    fn date_setters_keep_range_ordered() {
        let mut state = AppState::new(dataset());
        let late: NaiveDate = "2024-02-01".parse().unwrap();
        state.set_start_date(late);
        assert_eq!(state.selection.end, late);
        assert!(state.view.is_empty());

        let early: NaiveDate = "2024-01-01".parse().unwrap();
        state.set_end_date(early);
        assert_eq!(state.selection.start, early);
        assert_eq!(state.view.indices, vec![0]);
    }
}
