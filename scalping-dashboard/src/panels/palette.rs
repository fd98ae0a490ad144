//! Colors shared by every panel

use ratatui::style::{Color, Modifier, Style};

use crate::shared::types::{IvTier, Severity, Valuation};

pub const C_BUY: Color = Color::Rgb(100, 220, 100);       // Green
pub const C_SELL: Color = Color::Rgb(220, 100, 100);      // Red
pub const C_NEUTRAL: Color = Color::Rgb(180, 180, 100);   // Yellow
pub const C_DIM: Color = Color::Rgb(120, 120, 120);       // Gray
pub const C_BRIGHT: Color = Color::Rgb(220, 220, 220);    // White
pub const C_ACCENT: Color = Color::Rgb(100, 180, 220);    // Cyan
pub const C_HEADER: Color = Color::Rgb(180, 130, 220);    // Purple

/// Green for non-negative values, red otherwise
pub fn direction_color(value: f64) -> Color {
    if value >= 0.0 {
        C_BUY
    } else {
        C_SELL
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => C_BUY,
        Severity::Medium => C_NEUTRAL,
        Severity::High => C_SELL,
    }
}

pub fn valuation_color(valuation: Valuation) -> Color {
    match valuation {
        Valuation::Undervalued => C_BUY,
        Valuation::Fair => C_NEUTRAL,
        Valuation::Overvalued => C_SELL,
    }
}

pub fn iv_color(tier: IvTier) -> Color {
    match tier {
        IvTier::Low => C_BUY,
        IvTier::Medium => C_NEUTRAL,
        IvTier::High => C_SELL,
    }
}

pub fn label() -> Style {
    Style::default().fg(C_DIM)
}

pub fn value() -> Style {
    Style::default().fg(C_BRIGHT).add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default().fg(C_HEADER).add_modifier(Modifier::BOLD)
}
