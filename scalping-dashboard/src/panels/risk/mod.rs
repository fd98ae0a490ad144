//! Heuristic risk signals (static)

mod signals;
mod widget;

pub use signals::{compact_signals, RiskSummary, COMPACT_SIGNALS, RISK_SIGNALS, RISK_SUMMARY};
pub use widget::{render_risk_compact, render_risk_detailed};
