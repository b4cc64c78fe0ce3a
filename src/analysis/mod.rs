//! Analysis module - rankings and the country comparison table

mod summary;

pub use summary::{
    comparison_table, latest_totals, rank_by_death_rate, ComparisonRow, CountryTotal,
};
