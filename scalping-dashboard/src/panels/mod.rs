//! Dashboard panels, each split into view state and its ratatui widget

pub mod fundamentals;
pub mod history;
pub mod options;
pub mod palette;
pub mod quote;
pub mod risk;
pub mod watchlist;
