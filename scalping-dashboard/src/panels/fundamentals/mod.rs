//! Fundamental ratios for the whole watchlist

mod state;
mod widget;

pub use state::FundamentalsPanel;
pub use widget::{render_fundamentals, VALUATION_CARDS};
