//! Charts module - static chart rendering

mod renderer;

pub use renderer::{
    death_rate_bar, global_trend, spread_heatmap, top_confirmed_bar, ChartError,
};
