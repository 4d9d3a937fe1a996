use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// FilterSelection – the three facet controls
// ---------------------------------------------------------------------------

/// Current state of the three filter facets. Transient: rebuilt by the UI on
/// every control change, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Allowed region labels. Empty set means nothing passes.
    pub regions: BTreeSet<String>,
    /// Allowed product labels. Empty set means nothing passes.
    pub products: BTreeSet<String>,
    /// Inclusive start of the date range.
    pub start: NaiveDate,
    /// Inclusive end of the date range.
    pub end: NaiveDate,
}

impl FilterSelection {
    /// The default selection: every region, every product, the full date span.
    pub fn all(dataset: &Dataset) -> Self {
        FilterSelection {
            regions: dataset.regions.iter().cloned().collect(),
            products: dataset.products.iter().cloned().collect(),
            start: dataset.date_min,
            end: dataset.date_max,
        }
    }
}

/// Return indices of records that pass the current selection.
///
/// A record passes when its region and product are both selected and its date
/// falls inside `[start, end]`, inclusive on both ends. An empty region or
/// product set therefore produces an empty view; that is a valid state the
/// rest of the dashboard must render as "no data", not an error.
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.regions.contains(&rec.region)
                && selection.products.contains(&rec.product)
                && rec.date >= selection.start
                && rec.date <= selection.end
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(date: &str, region: &str, product: &str) -> Record {
        Record {
            date: date.parse().unwrap(),
            region: region.into(),
            product: product.into(),
            sales: 1.0,
            quantity: 1,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            rec("2024-01-01", "East", "Widget"),
            rec("2024-01-02", "West", "Gadget"),
            rec("2024-01-03", "East", "Gadget"),
        ])
        .unwrap()
    }

    #[test]
    fn default_selection_passes_everything() {
        let ds = dataset();
        let sel = FilterSelection::all(&ds);
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1, 2]);
    }

    #[test]
    fn every_facet_must_match() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.regions = ["East".to_string()].into();
        sel.products = ["Gadget".to_string()].into();

        let idx = filtered_indices(&ds, &sel);
        assert_eq!(idx, vec![2]);
        for &i in &idx {
            let r = &ds.records[i];
            assert!(sel.regions.contains(&r.region));
            assert!(sel.products.contains(&r.product));
            assert!(r.date >= sel.start && r.date <= sel.end);
        }
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.start = "2024-01-02".parse().unwrap();
        sel.end = "2024-01-03".parse().unwrap();
        assert_eq!(filtered_indices(&ds, &sel), vec![1, 2]);
    }

    #[test]
    fn single_day_range_keeps_only_that_day() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.start = "2024-01-02".parse().unwrap();
        sel.end = sel.start;
        assert_eq!(filtered_indices(&ds, &sel), vec![1]);
    }

    #[test]
    fn empty_region_set_hides_everything() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.regions.clear();
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn empty_product_set_hides_everything() {
        let ds = dataset();
        let mut sel = FilterSelection::all(&ds);
        sel.products.clear();
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn refiltering_is_idempotent() {
        let ds = dataset();
        let sel = FilterSelection::all(&ds);
        assert_eq!(filtered_indices(&ds, &sel), filtered_indices(&ds, &sel));
    }
}
