//! Data Transformer Module
//! Groups rows by country and transposes into a date-indexed time series.

use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;

use super::loader::{COUNTRY_COL, DATE_FORMAT};

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("cannot parse date header `{0}`")]
    BadDateHeader(String),
    #[error("date headers out of order: {prev} followed by {next}")]
    OutOfOrder { prev: NaiveDate, next: NaiveDate },
}

/// Per-country cumulative counts over a shared, strictly increasing date axis.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    countries: Vec<String>,
    /// `values[country_index][date_index]`
    values: Vec<Vec<f64>>,
}

impl TimeSeries {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Values for one country across all dates.
    pub fn series(&self, country: &str) -> Option<&[f64]> {
        self.countries
            .iter()
            .position(|c| c == country)
            .map(|i| self.values[i].as_slice())
    }

    /// Value on the most recent date for the country at `index`.
    pub fn latest(&self, index: usize) -> f64 {
        self.values[index].last().copied().unwrap_or(0.0)
    }

    /// Sum across all countries for each date.
    pub fn global_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.dates.len()];
        for row in &self.values {
            for (total, value) in totals.iter_mut().zip(row) {
                *total += value;
            }
        }
        totals
    }

    /// Date label for chart axes; empty when out of range.
    pub fn date_label(&self, index: usize) -> String {
        self.dates
            .get(index)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Group rows by country, summing the date columns across sub-regions.
///
/// Identical country names are summed into one row. Countries come out in
/// lexical order so downstream output is deterministic.
pub fn group_by_country(df: &DataFrame, date_cols: &[String]) -> Result<DataFrame, TransformError> {
    let sums: Vec<Expr> = date_cols
        .iter()
        .map(|name| col(name.as_str()).sum())
        .collect();

    let grouped = df
        .clone()
        .lazy()
        .group_by([col(COUNTRY_COL)])
        .agg(sums)
        .sort([COUNTRY_COL], SortMultipleOptions::default())
        .collect()?;

    Ok(grouped)
}

/// Transpose a grouped table into a [`TimeSeries`], parsing the column
/// headers as calendar dates.
///
/// Headers must all match [`DATE_FORMAT`] and be strictly increasing;
/// anything else is a named error rather than a silently misordered axis.
pub fn to_time_series(
    grouped: &DataFrame,
    date_cols: &[String],
) -> Result<TimeSeries, TransformError> {
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(date_cols.len());
    for name in date_cols {
        let date = NaiveDate::parse_from_str(name, DATE_FORMAT)
            .map_err(|_| TransformError::BadDateHeader(name.clone()))?;
        if let Some(&prev) = dates.last() {
            if date <= prev {
                return Err(TransformError::OutOfOrder { prev, next: date });
            }
        }
        dates.push(date);
    }

    let country_col = grouped.column(COUNTRY_COL)?;
    let mut countries: Vec<String> = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let value = country_col.get(i)?;
        countries.push(value.to_string().trim_matches('"').to_string());
    }

    let mut values = vec![vec![0.0; dates.len()]; countries.len()];
    for (j, name) in date_cols.iter().enumerate() {
        let column_f64 = grouped.column(name.as_str())?.cast(&DataType::Float64)?;
        let ca = column_f64.f64()?;
        for (i, row) in values.iter_mut().enumerate() {
            row[j] = ca.get(i).unwrap_or(0.0);
        }
    }

    Ok(TimeSeries {
        dates,
        countries,
        values,
    })
}
