//! Pipeline Driver
//! Runs the five stages in order and prints the textual report to stdout.

use anyhow::{Context, Result};
use std::fs;
use tracing::{info, warn};

use crate::analysis::{self, ComparisonRow, CountryTotal};
use crate::charts;
use crate::config::ReportConfig;
use crate::data;

/// Execute one full report run: load, clean, transform, analyze, render.
pub fn run(config: &ReportConfig) -> Result<()> {
    info!("loading input tables");
    let confirmed_raw = data::load_csv(&config.confirmed_path)
        .with_context(|| format!("loading {}", config.confirmed_path.display()))?;
    let deaths_raw = data::load_csv(&config.deaths_path)
        .with_context(|| format!("loading {}", config.deaths_path.display()))?;

    println!("--- Data acquisition ---");
    println!("Confirmed sample:\n{}", confirmed_raw.head(Some(5)));
    println!("Confirmed shape: {:?}", confirmed_raw.shape());
    println!("Deaths shape:    {:?}", deaths_raw.shape());

    let confirmed_dates = data::date_columns(&confirmed_raw);
    let deaths_dates = data::date_columns(&deaths_raw);

    info!("cleaning tables");
    let confirmed = data::clean(&confirmed_raw, &confirmed_dates)?;
    let deaths = data::clean(&deaths_raw, &deaths_dates)?;

    println!("\n--- Cleaning ---");
    println!("Confirmed shape: {:?}", confirmed.shape());
    println!("Deaths shape:    {:?}", deaths.shape());

    info!("grouping by country and transposing");
    let confirmed_grouped = data::group_by_country(&confirmed, &confirmed_dates)?;
    let deaths_grouped = data::group_by_country(&deaths, &deaths_dates)?;
    let confirmed_ts = data::to_time_series(&confirmed_grouped, &confirmed_dates)?;
    let deaths_ts = data::to_time_series(&deaths_grouped, &deaths_dates)?;

    println!("\n--- Transformation ---");
    println!(
        "Countries: {}, dates: {}",
        confirmed_ts.countries().len(),
        confirmed_ts.dates().len()
    );

    info!("ranking countries");
    let total_confirmed = analysis::latest_totals(&confirmed_ts);
    let total_deaths = analysis::latest_totals(&deaths_ts);

    println!("\n--- Analysis ---");
    print_ranking("Top 5 Countries by Confirmed Cases:", &total_confirmed, 5);
    print_ranking("Top 5 Countries by Deaths:", &total_deaths, 5);

    let table = analysis::comparison_table(&total_confirmed, &total_deaths);
    let by_rate = analysis::rank_by_death_rate(&table);

    println!("\n--- Comparison ---");
    print_comparison("Top 5 Countries by Death Rate:", &by_rate, 5);

    info!("rendering charts into {}", config.chart_dir.display());
    fs::create_dir_all(&config.chart_dir)
        .with_context(|| format!("creating {}", config.chart_dir.display()))?;

    let trend_path = config.chart_dir.join("global_trend.png");
    let top_confirmed_path = config.chart_dir.join("top_confirmed.png");
    let death_rate_path = config.chart_dir.join("death_rate.png");
    let heatmap_path = config.chart_dir.join("spread_heatmap.png");

    charts::global_trend(&confirmed_ts, &trend_path)?;
    charts::top_confirmed_bar(&total_confirmed, config.top_n, &top_confirmed_path)?;
    charts::death_rate_bar(&by_rate, config.top_n, &death_rate_path)?;

    let top_countries: Vec<String> = total_confirmed
        .iter()
        .take(config.top_n)
        .map(|t| t.country.clone())
        .collect();
    charts::spread_heatmap(&confirmed_ts, &top_countries, &heatmap_path)?;

    println!("\n--- Visualization ---");
    for path in [
        &trend_path,
        &top_confirmed_path,
        &death_rate_path,
        &heatmap_path,
    ] {
        println!("Chart written: {}", path.display());
        if config.open_charts {
            // Best effort; a headless session has no viewer to hand off to.
            if let Err(e) = open::that(path) {
                warn!("could not open {}: {e}", path.display());
            }
        }
    }

    info!("report complete");
    Ok(())
}

fn print_ranking(title: &str, totals: &[CountryTotal], n: usize) {
    println!("\n{title}");
    for t in totals.iter().take(n) {
        println!("  {:<28} {:>14.0}", t.country, t.total);
    }
}

fn print_comparison(title: &str, rows: &[ComparisonRow], n: usize) {
    println!("\n{title}");
    println!(
        "  {:<28} {:>14} {:>12} {:>16}",
        "Country", "Confirmed", "Deaths", "Death Rate (%)"
    );
    for row in rows.iter().take(n) {
        println!(
            "  {:<28} {:>14.0} {:>12.0} {:>16.2}",
            row.country, row.confirmed, row.deaths, row.death_rate
        );
    }
}
