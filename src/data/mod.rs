/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   sales_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, facet indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply facet selection → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
