//! Live quote card with timer-driven drift, plus the mini-quote grid

mod mini;
mod state;
mod widget;

pub use mini::{MiniQuoteBoard, MINI_QUOTE_CARDS};
pub use state::{QuotePanel, QuoteTimings};
pub use widget::{market_status_span, render_mini_quotes, render_quote_card};
