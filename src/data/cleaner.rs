//! Data Cleaner Module
//! Fills missing values and drops the coordinate columns.

use polars::prelude::*;
use thiserror::Error;

use super::loader::{LAT_COL, LONG_COL, PROVINCE_COL};

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Replace missing values and remove the `Lat`/`Long` columns.
///
/// Date-column nulls become zero, a missing `Province/State` becomes the
/// empty string. Row count is preserved; the result has exactly two fewer
/// columns than the input.
pub fn clean(df: &DataFrame, date_cols: &[String]) -> Result<DataFrame, CleanError> {
    let mut fills: Vec<Expr> = date_cols
        .iter()
        .map(|name| col(name.as_str()).fill_null(lit(0)))
        .collect();
    fills.push(col(PROVINCE_COL).fill_null(lit("")));

    let filled = df.clone().lazy().with_columns(fills).collect()?;
    let cleaned = filled.drop(LAT_COL)?.drop(LONG_COL)?;
    Ok(cleaned)
}
