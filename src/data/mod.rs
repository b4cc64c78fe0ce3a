//! Data module - CSV loading, cleaning and reshaping

mod cleaner;
mod loader;
mod transformer;

pub use cleaner::{clean, CleanError};
pub use loader::{date_columns, load_csv, LoaderError};
pub use loader::{COUNTRY_COL, DATE_FORMAT, LAT_COL, LONG_COL, PROVINCE_COL};
pub use transformer::{group_by_country, to_time_series, TimeSeries, TransformError};
