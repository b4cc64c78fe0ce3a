//! CSV Data Loader Module
//! Handles CSV file loading and schema validation using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column holding the country name. Fixed external contract of the
/// Johns Hopkins CSSE global time-series layout.
pub const COUNTRY_COL: &str = "Country/Region";
/// Optional sub-region column; empty for countries reported as one row.
pub const PROVINCE_COL: &str = "Province/State";
/// Latitude column, dropped during cleaning.
pub const LAT_COL: &str = "Lat";
/// Longitude column, dropped during cleaning.
pub const LONG_COL: &str = "Long";
/// Date header format, e.g. `1/22/20`.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Columns every input file must carry before the date columns.
pub const REQUIRED_COLUMNS: [&str; 4] = [PROVINCE_COL, COUNTRY_COL, LAT_COL, LONG_COL];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("required column `{0}` is missing")]
    MissingColumn(String),
    #[error("no date columns found in header")]
    NoDateColumns,
}

/// Load a CSV file using Polars and validate its schema.
///
/// Validation turns the layout assumptions into named errors instead of
/// positional lookups failing somewhere downstream.
pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
    if !path.is_file() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    validate_schema(&df)?;
    Ok(df)
}

fn validate_schema(df: &DataFrame) -> Result<(), LoaderError> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !names.iter().any(|n| n == required) {
            return Err(LoaderError::MissingColumn(required.to_string()));
        }
    }

    if date_columns(df).is_empty() {
        return Err(LoaderError::NoDateColumns);
    }

    Ok(())
}

/// Column names holding per-date counts: everything that is not part of the
/// fixed region/coordinate header.
pub fn date_columns(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|s| s.to_string())
        .filter(|name| !REQUIRED_COLUMNS.contains(&name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_valid_file_and_extracts_date_columns() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "confirmed.csv",
            "Province/State,Country/Region,Lat,Long,1/22/20,1/23/20\n\
             ,A,1.0,2.0,10,12\n\
             ,B,3.0,4.0,5,8\n",
        );

        let df = load_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(date_columns(&df), vec!["1/22/20", "1/23/20"]);
    }

    #[test]
    fn missing_required_column_is_a_named_error() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "no_lat.csv",
            "Province/State,Country/Region,Long,1/22/20\n,A,2.0,10\n",
        );

        let err = load_csv(&path).unwrap_err();
        match err {
            LoaderError::MissingColumn(name) => assert_eq!(name, "Lat"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_a_named_error() {
        let err = load_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn header_without_dates_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "no_dates.csv",
            "Province/State,Country/Region,Lat,Long\n,A,1.0,2.0\n",
        );

        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoaderError::NoDateColumns));
    }
}
