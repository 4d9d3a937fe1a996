use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Columns the source file must provide, by header name.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Date", "Region", "Product", "Sales", "Quantity"];

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Fatal dataset-loading failures. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Malformed row: unparseable date, non-numeric sales/quantity, wrong
    /// field count. The csv error carries the row position.
    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the sales dataset from a CSV file.
///
/// Expected layout: header row `Date,Region,Product,Sales,Quantity`, with
/// `Date` in ISO-8601 (`2024-01-31`), `Sales` numeric and `Quantity` integer.
/// Extra columns are ignored. The result is loaded exactly once per process;
/// a changed source file is not picked up without a restart.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row?);
    }

    Dataset::from_records(records).ok_or(LoadError::Empty)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_well_formed_file() {
        let f = write_csv(
            "Date,Region,Product,Sales,Quantity\n\
             2024-01-01,East,Widget,100,2\n\
             2024-01-02,West,Gadget,50.5,1\n",
        );
        let ds = load_csv(f.path()).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].region, "East");
        assert_eq!(ds.records[1].sales, 50.5);
        assert_eq!(ds.records[1].quantity, 1);
        assert_eq!(ds.date_min, "2024-01-01".parse().unwrap());
        assert_eq!(ds.date_max, "2024-01-02".parse().unwrap());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let f = write_csv(
            "Date,Region,Product,Sales,Quantity,Channel\n\
             2024-01-01,East,Widget,100,2,Online\n",
        );
        assert_eq!(load_csv(f.path()).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = load_csv(Path::new("/nonexistent/sales.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let f = write_csv("Date,Region,Product,Sales\n2024-01-01,East,Widget,100\n");
        let err = load_csv(f.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Quantity")));
    }

    #[test]
    fn malformed_date_is_csv_error() {
        let f = write_csv(
            "Date,Region,Product,Sales,Quantity\n\
             01/01/2024,East,Widget,100,2\n",
        );
        assert!(matches!(load_csv(f.path()).unwrap_err(), LoadError::Csv(_)));
    }

    #[test]
    fn header_only_file_is_empty_error() {
        let f = write_csv("Date,Region,Product,Sales,Quantity\n");
        assert!(matches!(load_csv(f.path()).unwrap_err(), LoadError::Empty));
    }
}
