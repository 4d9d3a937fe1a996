use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

/// Scalar summary metrics over the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    pub total_sales: f64,
    pub total_quantity: u64,
    /// `total_sales / total_quantity`, defined as 0.0 when no units were sold.
    pub avg_order_value: f64,
}

/// Compute the three KPIs in one pass over the filtered indices.
pub fn kpis(dataset: &Dataset, indices: &[usize]) -> Kpis {
    let mut total_sales = 0.0;
    let mut total_quantity = 0u64;
    for &i in indices {
        total_sales += dataset.records[i].sales;
        total_quantity += dataset.records[i].quantity;
    }
    let avg_order_value = if total_quantity > 0 {
        total_sales / total_quantity as f64
    } else {
        0.0
    };
    Kpis {
        total_sales,
        total_quantity,
        avg_order_value,
    }
}

// ---------------------------------------------------------------------------
// Grouped sums
// ---------------------------------------------------------------------------

/// Sales summed per distinct date, ascending by date.
pub fn time_series(dataset: &Dataset, indices: &[usize]) -> Vec<(NaiveDate, f64)> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        *by_date.entry(rec.date).or_default() += rec.sales;
    }
    by_date.into_iter().collect()
}

/// Sales summed per distinct region, in the dataset's first-occurrence
/// region order. Regions absent from the filtered view are omitted.
pub fn region_totals(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    let mut by_region: BTreeMap<&str, f64> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        *by_region.entry(rec.region.as_str()).or_default() += rec.sales;
    }
    dataset
        .regions
        .iter()
        .filter_map(|r| by_region.get(r.as_str()).map(|&sum| (r.clone(), sum)))
        .collect()
}

/// Raw per-record (product, sales) pairs in row order, deliberately NOT
/// pre-summed: the distribution renderer computes proportions itself.
pub fn product_pairs(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    indices
        .iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            (rec.product.clone(), rec.sales)
        })
        .collect()
}

/// Sales summed per distinct product, as a label → weight mapping for the
/// frequency-weighted cloud. Empty when the view is empty; the caller must
/// suppress the cloud instead of rendering it on an empty mapping.
pub fn product_frequency(dataset: &Dataset, indices: &[usize]) -> BTreeMap<String, f64> {
    let mut freq: BTreeMap<String, f64> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        *freq.entry(rec.product.clone()).or_default() += rec.sales;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(date: &str, region: &str, product: &str, sales: f64, quantity: u64) -> Record {
        Record {
            date: date.parse().unwrap(),
            region: region.into(),
            product: product.into(),
            sales,
            quantity,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            rec("2024-01-01", "East", "Widget", 100.0, 2),
            rec("2024-01-02", "West", "Gadget", 50.0, 1),
        ])
        .unwrap()
    }

    #[test]
    fn kpis_sum_sales_and_quantity_exactly() {
        let ds = dataset();
        let k = kpis(&ds, &[0, 1]);
        assert_eq!(k.total_sales, 150.0);
        assert_eq!(k.total_quantity, 3);
        assert_eq!(k.avg_order_value, 50.0);
    }

    #[test]
    fn avg_order_value_is_zero_when_no_units_sold() {
        let ds = Dataset::from_records(vec![rec("2024-01-01", "East", "Widget", 100.0, 0)])
            .unwrap();
        let k = kpis(&ds, &[0]);
        assert_eq!(k.total_quantity, 0);
        assert_eq!(k.avg_order_value, 0.0);
        assert!(!k.avg_order_value.is_nan());
    }

    #[test]
    fn empty_view_yields_zero_kpis() {
        let ds = dataset();
        let k = kpis(&ds, &[]);
        assert_eq!(k, Kpis::default());
    }

    #[test]
    fn time_series_is_ascending_and_partitions_total() {
        let ds = Dataset::from_records(vec![
            rec("2024-01-03", "East", "Widget", 10.0, 1),
            rec("2024-01-01", "East", "Widget", 20.0, 1),
            rec("2024-01-03", "West", "Gadget", 30.0, 1),
        ])
        .unwrap();
        let idx = [0, 1, 2];
        let series = time_series(&ds, &idx);

        assert_eq!(
            series,
            vec![
                ("2024-01-01".parse().unwrap(), 20.0),
                ("2024-01-03".parse().unwrap(), 40.0),
            ]
        );
        let series_sum: f64 = series.iter().map(|(_, s)| s).sum();
        assert_eq!(series_sum, kpis(&ds, &idx).total_sales);
    }

    #[test]
    fn region_totals_follow_dataset_order() {
        let ds = Dataset::from_records(vec![
            rec("2024-01-01", "West", "Widget", 5.0, 1),
            rec("2024-01-02", "East", "Widget", 7.0, 1),
            rec("2024-01-03", "West", "Gadget", 3.0, 1),
        ])
        .unwrap();
        let totals = region_totals(&ds, &[0, 1, 2]);
        assert_eq!(
            totals,
            vec![("West".to_string(), 8.0), ("East".to_string(), 7.0)]
        );
    }

    #[test]
    fn product_pairs_are_not_pre_summed() {
        let ds = Dataset::from_records(vec![
            rec("2024-01-01", "East", "Widget", 10.0, 1),
            rec("2024-01-02", "East", "Widget", 15.0, 1),
        ])
        .unwrap();
        let pairs = product_pairs(&ds, &[0, 1]);
        assert_eq!(
            pairs,
            vec![("Widget".to_string(), 10.0), ("Widget".to_string(), 15.0)]
        );
    }

    #[test]
    fn product_frequency_groups_and_is_empty_on_empty_view() {
        let ds = Dataset::from_records(vec![
            rec("2024-01-01", "East", "Widget", 10.0, 1),
            rec("2024-01-02", "West", "Widget", 15.0, 1),
            rec("2024-01-03", "East", "Gadget", 5.0, 1),
        ])
        .unwrap();
        let freq = product_frequency(&ds, &[0, 1, 2]);
        assert_eq!(freq.get("Widget"), Some(&25.0));
        assert_eq!(freq.get("Gadget"), Some(&5.0));
        assert_eq!(freq.len(), 2);

        assert!(product_frequency(&ds, &[]).is_empty());
    }
}
