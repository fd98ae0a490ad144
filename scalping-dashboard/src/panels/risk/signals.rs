//! Canned risk signals and their summary

use crate::shared::types::{RiskSignal, Severity};

/// Signals shown on the compact overview list
pub const COMPACT_SIGNALS: usize = 3;

pub static RISK_SIGNALS: [RiskSignal; 4] = [
    RiskSignal {
        category: "Technical",
        label: "RSI Oversold",
        severity: Severity::Low,
        description: "RSI indicates oversold conditions - potential buy opportunity",
        confidence: 85,
        timeframe: "1min",
    },
    RiskSignal {
        category: "Volume",
        label: "High Volume Spike",
        severity: Severity::Medium,
        description: "Unusual volume activity detected",
        confidence: 72,
        timeframe: "4min",
    },
    RiskSignal {
        category: "Price Action",
        label: "Support Break",
        severity: Severity::High,
        description: "Price broke below key support level",
        confidence: 91,
        timeframe: "2min",
    },
    RiskSignal {
        category: "Momentum",
        label: "MACD Bullish Cross",
        severity: Severity::Low,
        description: "MACD signal line crossed above zero",
        confidence: 78,
        timeframe: "3min",
    },
];

/// Fixed assessment shown beside the detailed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskSummary {
    pub overall: Severity,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub recommendation: &'static str,
}

pub const RISK_SUMMARY: RiskSummary = RiskSummary {
    overall: Severity::Medium,
    low: 2,
    medium: 1,
    high: 1,
    recommendation: "Mixed signals detected. Consider reducing position size and using tight stop losses for scalping trades.",
};

/// Signals for the overview list
pub fn compact_signals() -> &'static [RiskSignal] {
    &RISK_SIGNALS[..COMPACT_SIGNALS]
}
