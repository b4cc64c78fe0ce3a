//! Static Chart Renderer
//! Renders the four report charts to PNG files using plotters.

use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::analysis::{ComparisonRow, CountryTotal};
use crate::data::TimeSeries;

const TREND_BLUE: RGBColor = RGBColor(52, 152, 219);
const BAR_BLUE: RGBColor = RGBColor(52, 152, 219);
const BAR_RED: RGBColor = RGBColor(231, 76, 60);
// seaborn "Reds" endpoints
const HEAT_LOW: (u8, u8, u8) = (255, 245, 240);
const HEAT_HIGH: (u8, u8, u8) = (103, 0, 13);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("no data to plot")]
    EmptyData,
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Line chart of the global confirmed total per date.
pub fn global_trend(ts: &TimeSeries, path: &Path) -> Result<(), ChartError> {
    let totals = ts.global_totals();
    if totals.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let y_max = totals.iter().copied().fold(0.0_f64, f64::max).max(1.0) * 1.05;

    let root = BitMapBackend::new(path, (1400, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Global COVID-19 Confirmed Cases Over Time", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(0..totals.len(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(10)
        .x_label_formatter(&|i| ts.date_label(*i))
        .x_desc("Date")
        .y_desc("Total Cases")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            totals.iter().enumerate().map(|(i, &v)| (i, v)),
            &TREND_BLUE,
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Bar chart of the top countries by confirmed total.
pub fn top_confirmed_bar(
    totals: &[CountryTotal],
    top_n: usize,
    path: &Path,
) -> Result<(), ChartError> {
    let entries: Vec<(String, f64)> = totals
        .iter()
        .take(top_n)
        .map(|t| (t.country.clone(), t.total))
        .collect();

    bar_chart(
        "Top Countries by Confirmed COVID-19 Cases",
        "Cases",
        BAR_BLUE,
        &entries,
        path,
    )
}

/// Bar chart of the top countries by death rate.
///
/// Only finite rates can be drawn as bars; the stdout table still carries
/// the non-finite rows.
pub fn death_rate_bar(
    ranked: &[ComparisonRow],
    top_n: usize,
    path: &Path,
) -> Result<(), ChartError> {
    let entries: Vec<(String, f64)> = ranked
        .iter()
        .filter(|row| row.death_rate.is_finite())
        .take(top_n)
        .map(|row| (row.country.clone(), row.death_rate))
        .collect();

    bar_chart(
        "Top Countries by COVID-19 Death Rate",
        "Death Rate (%)",
        BAR_RED,
        &entries,
        path,
    )
}

fn bar_chart(
    title: &str,
    y_label: &str,
    color: RGBColor,
    entries: &[(String, f64)],
    path: &Path,
) -> Result<(), ChartError> {
    if entries.is_empty() {
        return Err(ChartError::EmptyData);
    }
    let n = entries.len();
    let y_max = entries.iter().map(|e| e.1).fold(0.0_f64, f64::max).max(1.0) * 1.1;

    let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) if *i < n => entries[*i].0.clone(),
            _ => String::new(),
        })
        .x_labels(n)
        .x_desc("Country")
        .y_desc(y_label)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, (_, value))| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), *value),
                ],
                color.filled(),
            );
            bar.set_margin(0, 0, 8, 8);
            bar
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Country x date heatmap for the given countries, white to red over the
/// global maximum of the shown grid.
pub fn spread_heatmap(
    ts: &TimeSeries,
    countries: &[String],
    path: &Path,
) -> Result<(), ChartError> {
    let rows: Vec<(&str, &[f64])> = countries
        .iter()
        .filter_map(|c| ts.series(c).map(|s| (c.as_str(), s)))
        .collect();
    let n_dates = ts.dates().len();
    if rows.is_empty() || n_dates == 0 {
        return Err(ChartError::EmptyData);
    }

    let max = rows
        .iter()
        .flat_map(|(_, series)| series.iter().copied())
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("COVID-19 Spread Heatmap (Top Countries)", ("sans-serif", 30))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(140)
        .build_cartesian_2d(0..n_dates, 0..rows.len())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(8)
        .x_label_formatter(&|i| ts.date_label(*i))
        .y_labels(rows.len())
        .y_label_formatter(&|i| {
            rows.get(*i)
                .map(|(name, _)| name.to_string())
                .unwrap_or_default()
        })
        .x_desc("Date")
        .y_desc("Country")
        .draw()
        .map_err(render_err)?;

    let mut cells = Vec::with_capacity(rows.len() * n_dates);
    for (r, (_, series)) in rows.iter().enumerate() {
        for (c, &value) in series.iter().enumerate() {
            cells.push(Rectangle::new(
                [(c, r), (c + 1, r + 1)],
                heat_color(value, max).filled(),
            ));
        }
    }
    chart.draw_series(cells).map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Linear white-to-red ramp; `value` clamped into `0..=max`.
fn heat_color(value: f64, max: f64) -> RGBColor {
    let t = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        lerp(HEAT_LOW.0, HEAT_HIGH.0),
        lerp(HEAT_LOW.1, HEAT_HIGH.1),
        lerp(HEAT_LOW.2, HEAT_HIGH.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_color_spans_the_ramp() {
        let RGBColor(r0, g0, b0) = heat_color(0.0, 100.0);
        assert_eq!((r0, g0, b0), HEAT_LOW);

        let RGBColor(r1, g1, b1) = heat_color(100.0, 100.0);
        assert_eq!((r1, g1, b1), HEAT_HIGH);
    }

    #[test]
    fn heat_color_clamps_out_of_range_values() {
        let RGBColor(r, g, b) = heat_color(250.0, 100.0);
        assert_eq!((r, g, b), HEAT_HIGH);

        let RGBColor(r, g, b) = heat_color(-5.0, 100.0);
        assert_eq!((r, g, b), HEAT_LOW);
    }

    #[test]
    fn heat_color_handles_zero_max() {
        let RGBColor(r, g, b) = heat_color(0.0, 0.0);
        assert_eq!((r, g, b), HEAT_LOW);
    }
}
