//! Covid Trends - COVID-19 time-series ETL & chart report
//!
//! Reads the confirmed/deaths CSVs from the fixed dataset paths, prints the
//! summary report and writes the four charts.

use anyhow::Result;
use covid_trends::{config::ReportConfig, pipeline};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    pipeline::run(&ReportConfig::default())
}
