/// Scalping Dashboard - Shared Library
///
/// Terminal dashboard for short-horizon traders: a live quote card with
/// timer-driven drift, a watchlist with symbol search, a price history
/// chart, risk signals, fundamentals and an options chain.
///
/// The library includes:
/// - Core data types, formatting and the pluggable market data source
/// - Configuration, errors and recurring timers
/// - One module per panel (view state + ratatui widget)
/// - The tabbed dashboard container used by the binary
pub mod dashboard;
pub mod panels;
pub mod shared;

// Re-export commonly used types for convenience
pub use dashboard::{render_dashboard, Action, Dashboard, Tab};

pub use shared::config::{DashboardConfig, SelectorStyle};
pub use shared::error::DashboardError;
pub use shared::source::{MarketDataSource, SyntheticSource};
pub use shared::timer::{timer_channel, IntervalTimer, TimerEvent, TimerReceiver, TimerSender};

pub use shared::types::{
    Category, FundamentalRow, HistoryPoint, MarketStatus, MiniQuote, OptionContract, OptionSide,
    Quote, RiskSignal, Severity, TimeRange, Valuation, WatchlistEntry,
};
