//! Report Configuration
//! Explicit parameters for the pipeline; no CLI flags or environment lookups.

use std::path::PathBuf;

/// Configuration for one report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// CSV with cumulative confirmed cases per region and date.
    pub confirmed_path: PathBuf,
    /// CSV with cumulative deaths per region and date.
    pub deaths_path: PathBuf,
    /// Directory the rendered PNG charts are written to.
    pub chart_dir: PathBuf,
    /// How many countries the bar charts and the heatmap show.
    pub top_n: usize,
    /// Open each rendered chart with the system default image viewer.
    pub open_charts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            confirmed_path: PathBuf::from("dataset/time_series_covid19_confirmed_global.csv"),
            deaths_path: PathBuf::from("dataset/time_series_covid19_deaths_global.csv"),
            chart_dir: PathBuf::from("charts"),
            top_n: 10,
            open_charts: true,
        }
    }
}
