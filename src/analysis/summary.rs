//! Summary Statistics Module
//! Latest-day totals, rankings and the death-rate comparison table.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::data::TimeSeries;

/// One country with its cumulative total on the latest date.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryTotal {
    pub country: String,
    pub total: f64,
}

/// One row of the confirmed/deaths comparison table.
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub country: String,
    pub confirmed: f64,
    pub deaths: f64,
    /// deaths / confirmed * 100. Non-finite when confirmed is zero; that
    /// value flows into the output as-is.
    pub death_rate: f64,
}

/// Totals on the most recent date, sorted descending.
pub fn latest_totals(ts: &TimeSeries) -> Vec<CountryTotal> {
    let mut totals: Vec<CountryTotal> = ts
        .countries()
        .iter()
        .enumerate()
        .map(|(i, country)| CountryTotal {
            country: country.clone(),
            total: ts.latest(i),
        })
        .collect();

    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    totals
}

/// Join the two rankings into a comparison table, keeping the confirmed
/// ordering. Countries absent from the deaths ranking count as zero deaths.
pub fn comparison_table(
    confirmed: &[CountryTotal],
    deaths: &[CountryTotal],
) -> Vec<ComparisonRow> {
    let deaths_by_country: HashMap<&str, f64> = deaths
        .iter()
        .map(|t| (t.country.as_str(), t.total))
        .collect();

    confirmed
        .iter()
        .map(|c| {
            let deaths = deaths_by_country
                .get(c.country.as_str())
                .copied()
                .unwrap_or(0.0);
            ComparisonRow {
                country: c.country.clone(),
                confirmed: c.total,
                deaths,
                death_rate: deaths / c.total * 100.0,
            }
        })
        .collect()
}

/// Rows sorted descending by death rate. NaN rates sort last so a country
/// with no confirmed cases cannot crash or distort the ranking.
pub fn rank_by_death_rate(rows: &[ComparisonRow]) -> Vec<ComparisonRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| match (a.death_rate.is_nan(), b.death_rate.is_nan()) {
        (false, false) => b
            .death_rate
            .partial_cmp(&a.death_rate)
            .unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{date_columns, group_by_country, load_csv, to_time_series, TimeSeries};
    use std::fs;
    use tempfile::tempdir;

    fn series_from_csv(contents: &str) -> TimeSeries {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, contents).unwrap();
        let df = load_csv(&path).unwrap();
        let date_cols = date_columns(&df);
        let grouped = group_by_country(&df, &date_cols).unwrap();
        to_time_series(&grouped, &date_cols).unwrap()
    }

    #[test]
    fn latest_totals_take_last_date_and_sort_descending() {
        let ts = series_from_csv(
            "Province/State,Country/Region,Lat,Long,1/22/20,1/23/20\n\
             ,A,1.0,2.0,10,15\n\
             ,B,3.0,4.0,5,50\n\
             ,C,5.0,6.0,2,7\n",
        );
        let totals = latest_totals(&ts);

        for pair in totals.windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
        assert_eq!(totals[0].country, "B");
        assert_eq!(totals[0].total, 50.0);
    }

    #[test]
    fn death_rate_is_exact_for_positive_confirmed() {
        let confirmed = vec![
            CountryTotal {
                country: "A".into(),
                total: 30.0,
            },
            CountryTotal {
                country: "B".into(),
                total: 5.0,
            },
        ];
        let deaths = vec![
            CountryTotal {
                country: "A".into(),
                total: 3.0,
            },
            CountryTotal {
                country: "B".into(),
                total: 1.0,
            },
        ];

        let table = comparison_table(&confirmed, &deaths);
        assert_eq!(table[0].death_rate, 10.0);
        assert_eq!(table[1].death_rate, 20.0);
    }

    #[test]
    fn zero_confirmed_yields_nan_without_crashing() {
        let confirmed = vec![CountryTotal {
            country: "Empty".into(),
            total: 0.0,
        }];
        let deaths = vec![CountryTotal {
            country: "Empty".into(),
            total: 0.0,
        }];

        let table = comparison_table(&confirmed, &deaths);
        assert!(table[0].death_rate.is_nan());

        let ranked = rank_by_death_rate(&table);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn nan_rates_sort_last() {
        let rows = vec![
            ComparisonRow {
                country: "NoCases".into(),
                confirmed: 0.0,
                deaths: 0.0,
                death_rate: f64::NAN,
            },
            ComparisonRow {
                country: "Low".into(),
                confirmed: 100.0,
                deaths: 1.0,
                death_rate: 1.0,
            },
            ComparisonRow {
                country: "High".into(),
                confirmed: 100.0,
                deaths: 20.0,
                death_rate: 20.0,
            },
        ];

        let ranked = rank_by_death_rate(&rows);
        assert_eq!(ranked[0].country, "High");
        assert_eq!(ranked[1].country, "Low");
        assert_eq!(ranked[2].country, "NoCases");
    }

    #[test]
    fn country_missing_from_deaths_counts_as_zero() {
        let confirmed = vec![CountryTotal {
            country: "A".into(),
            total: 10.0,
        }];
        let table = comparison_table(&confirmed, &[]);
        assert_eq!(table[0].deaths, 0.0);
        assert_eq!(table[0].death_rate, 0.0);
    }
}
