//! Covid Trends - COVID-19 time-series ETL & chart report
//!
//! Loads the Johns Hopkins style confirmed/deaths CSVs, cleans and reshapes
//! them into per-country time series, ranks countries by latest totals and
//! death rate, and renders four static charts.

pub mod analysis;
pub mod charts;
pub mod config;
pub mod data;
pub mod pipeline;
