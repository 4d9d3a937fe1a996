use chrono::NaiveDate;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – one sales transaction (one CSV row)
// ---------------------------------------------------------------------------

/// A single sales transaction. Immutable once loaded.
///
/// Deserialized straight from the CSV header names
/// (`Date, Region, Product, Sales, Quantity`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Transaction date (ISO-8601 in the source file).
    pub date: NaiveDate,
    pub region: String,
    pub product: String,
    /// Sale amount in currency units. Non-negative in well-formed input.
    pub sales: f64,
    /// Units sold. Non-negative in well-formed input.
    pub quantity: u64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed facet indices.
///
/// Built once at startup and read-only afterwards; every downstream view is a
/// pure function of `records` plus a filter selection.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All transactions in source row order.
    pub records: Vec<Record>,
    /// Distinct region labels in first-occurrence order.
    pub regions: Vec<String>,
    /// Distinct product labels in first-occurrence order.
    pub products: Vec<String>,
    /// Earliest transaction date.
    pub date_min: NaiveDate,
    /// Latest transaction date.
    pub date_max: NaiveDate,
}

impl Dataset {
    /// Build facet indices from the loaded records.
    ///
    /// Returns `None` for an empty record list: without rows there is no
    /// meaningful date range and the dashboard has nothing to show.
    pub fn from_records(records: Vec<Record>) -> Option<Self> {
        let first = records.first()?;
        let mut date_min = first.date;
        let mut date_max = first.date;
        let mut regions: Vec<String> = Vec::new();
        let mut products: Vec<String> = Vec::new();

        for rec in &records {
            if !regions.iter().any(|r| r == &rec.region) {
                regions.push(rec.region.clone());
            }
            if !products.iter().any(|p| p == &rec.product) {
                products.push(rec.product.clone());
            }
            date_min = date_min.min(rec.date);
            date_max = date_max.max(rec.date);
        }

        Some(Dataset {
            records,
            regions,
            products,
            date_min,
            date_max,
        })
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
