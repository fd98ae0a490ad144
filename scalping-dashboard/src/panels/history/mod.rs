//! Historical price chart

mod state;
mod widget;

pub use state::{HistoryPanel, HistorySummary};
pub use widget::{render_history, MARKET_CLOSED_NOTICE};
