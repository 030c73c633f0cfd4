//! Display formatting for terminal output

pub mod stats;

pub use stats::{
    category_stats_view, over_budget_warning, overspent_warning, selected_summary_view,
    totals_view,
};
