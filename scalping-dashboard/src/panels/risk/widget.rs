//! Risk signal list (compact) and risk tab (detailed)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::signals::{compact_signals, RISK_SIGNALS, RISK_SUMMARY};
use crate::panels::palette::{self, severity_color, C_BUY, C_DIM, C_NEUTRAL};
use crate::shared::types::{RiskSignal, Severity};

fn signal_header(signal: &RiskSignal) -> Line<'static> {
    let color = severity_color(signal.severity);
    Line::from(vec![
        Span::styled(
            format!("[{}] ", signal.severity),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(signal.label, palette::value()),
        Span::styled(format!("  {} · {}", signal.category, signal.timeframe), palette::label()),
    ])
}

/// First few signals, for the overview
pub fn render_risk_compact(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" RISK SIGNALS ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));

    let mut lines = Vec::new();
    for signal in compact_signals() {
        lines.push(signal_header(signal));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", signal.description), palette::label()),
            Span::styled(format!("  {}%", signal.confidence), Style::default().fg(C_NEUTRAL)),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// Every signal with a confidence bar, plus the summary
pub fn render_risk_detailed(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let block = Block::default()
        .title(" ACTIVE SIGNALS ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));
    let inner = block.inner(columns[0]);
    f.render_widget(block, columns[0]);

    // Header, description, confidence bar, blank spacer
    let mut y = 0;
    for signal in RISK_SIGNALS.iter() {
        if y + 3 > inner.height {
            break;
        }
        let row = |offset: u16| Rect::new(inner.x, inner.y + y + offset, inner.width, 1);

        f.render_widget(Paragraph::new(signal_header(signal)), row(0));
        f.render_widget(
            Paragraph::new(Span::styled(format!("  {}", signal.description), palette::label())),
            row(1),
        );
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(severity_color(signal.severity))
                    .bg(Color::Black),
            )
            .ratio((f64::from(signal.confidence) / 100.0).clamp(0.0, 1.0))
            .label(format!("Confidence {}%", signal.confidence));
        f.render_widget(gauge, row(2));
        y += 4;
    }

    render_summary(f, columns[1]);
}

fn render_summary(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" RISK SUMMARY ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));

    let count = |severity: Severity, n: usize| {
        Line::from(vec![
            Span::styled(format!("{:<8}", severity.as_str()), palette::label()),
            Span::styled(n.to_string(), Style::default().fg(severity_color(severity))),
        ])
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Overall Risk ", palette::label()),
            Span::styled(
                RISK_SUMMARY.overall.as_str(),
                Style::default()
                    .fg(severity_color(RISK_SUMMARY.overall))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        count(Severity::Low, RISK_SUMMARY.low),
        count(Severity::Medium, RISK_SUMMARY.medium),
        count(Severity::High, RISK_SUMMARY.high),
        Line::from(""),
        Line::from(Span::styled("Recommendation", Style::default().fg(C_BUY))),
        Line::from(Span::styled(RISK_SUMMARY.recommendation, palette::value())),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
