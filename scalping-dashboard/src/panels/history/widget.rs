//! History chart with summary strip

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use super::state::HistoryPanel;
use crate::panels::palette::{self, C_ACCENT, C_BRIGHT, C_DIM, C_NEUTRAL};
use crate::panels::quote::market_status_span;
use crate::shared::format::format_price;
use crate::shared::types::{MarketStatus, TimeRange};

pub const MARKET_CLOSED_NOTICE: &str =
    "Market is currently closed. Data shown reflects the most recent trading session.";

/// Range selector, summary, chart and (when closed) the session notice
pub fn render_history(
    f: &mut Frame,
    area: Rect,
    panel: &HistoryPanel,
    status: MarketStatus,
    show_market_badge: bool,
) {
    let notice_height = if status.is_open() { 0 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(notice_height),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    render_range_bar(f, chunks[0], panel.range(), status, show_market_badge);

    if !status.is_open() {
        f.render_widget(
            Paragraph::new(Span::styled(MARKET_CLOSED_NOTICE, Style::default().fg(C_NEUTRAL))),
            chunks[1],
        );
    }

    render_summary(f, chunks[2], panel);
    render_chart(f, chunks[3], panel);
}

fn render_range_bar(
    f: &mut Frame,
    area: Rect,
    current: TimeRange,
    status: MarketStatus,
    show_market_badge: bool,
) {
    let mut spans = vec![Span::styled("Range ", palette::label())];
    for range in TimeRange::ALL {
        let style = if range == current {
            Style::default()
                .fg(C_BRIGHT)
                .bg(C_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(C_DIM)
        };
        spans.push(Span::styled(format!(" {} ", range), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(r: cycle, d/w/m)", palette::label()));
    if show_market_badge {
        spans.push(Span::raw("   "));
        spans.push(market_status_span(status));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_summary(f: &mut Frame, area: Rect, panel: &HistoryPanel) {
    let summary = panel.summary();
    let block = Block::default()
        .title(" SUMMARY ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));

    let line = Line::from(vec![
        Span::styled("Average ", palette::label()),
        Span::styled(format_price(summary.average), palette::value()),
        Span::styled("   Range ", palette::label()),
        Span::styled(
            format!("{} - {}", format_price(summary.max), format_price(summary.min)),
            palette::value(),
        ),
        Span::styled("   Volatility ", palette::label()),
        Span::styled("Medium", Style::default().fg(C_NEUTRAL)),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_chart(f: &mut Frame, area: Rect, panel: &HistoryPanel) {
    let title = format!(" {} PRICE HISTORY ({}) ", panel.symbol(), panel.range());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));

    let points = panel.points();
    if points.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("  No historical data available", palette::label()))
                .block(block),
            area,
        );
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price))
        .collect();
    let summary = panel.summary();
    let pad = ((summary.max - summary.min) * 0.05).max(0.5);
    let (min_y, max_y) = (summary.min - pad, summary.max + pad);

    let first = points.first().map(|p| p.time.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.time.clone()).unwrap_or_default();

    let datasets = vec![Dataset::default()
        .name("Price")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(C_ACCENT))
        .data(&data)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(C_DIM))
                .bounds([0.0, (points.len() - 1).max(1) as f64])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(C_DIM))
                .bounds([min_y, max_y])
                .labels(vec![
                    Span::raw(format!("{:.2}", min_y)),
                    Span::raw(format!("{:.2}", max_y)),
                ]),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::source::SyntheticSource;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn msft_week() -> HistoryPanel {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let mut source = SyntheticSource::with_seed(31);
        HistoryPanel::new("MSFT", TimeRange::OneWeek, &mut source, now)
    }

    fn render(status: MarketStatus) -> String {
        let panel = msft_week();
        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();
        terminal
            .draw(|f| render_history(f, f.area(), &panel, status, true))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_closed_notice_only_when_closed() {
        assert!(render(MarketStatus::Closed).contains("Market is currently closed"));
        assert!(!render(MarketStatus::Open).contains("Market is currently closed"));
    }

    #[test]
    fn test_chart_title_names_symbol_and_range() {
        let text = render(MarketStatus::Open);
        assert!(text.contains("MSFT PRICE HISTORY (1W)"));
        assert!(text.contains("Average"));
    }

    #[test]
    fn test_summary_range_reads_high_to_low() {
        let summary = msft_week().summary();
        assert!(summary.max > summary.min);

        let high_low = format!("{} - {}", format_price(summary.max), format_price(summary.min));
        let low_high = format!("{} - {}", format_price(summary.min), format_price(summary.max));
        let text = render(MarketStatus::Open);
        assert!(text.contains(&high_low));
        assert!(!text.contains(&low_high));
    }
}
