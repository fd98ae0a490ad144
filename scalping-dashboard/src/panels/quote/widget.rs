//! Quote card and mini-quote grid

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::mini::{MiniQuoteBoard, MINI_QUOTE_CARDS};
use super::state::QuotePanel;
use crate::panels::palette::{self, direction_color, C_ACCENT, C_BUY, C_DIM, C_NEUTRAL, C_SELL};
use crate::shared::format::{
    format_money_compact, format_price, format_signed, format_signed_pct, format_volume,
};
use crate::shared::types::{MarketStatus, WatchlistEntry};

/// Market status badge, e.g. "● Market Open"
pub fn market_status_span(status: MarketStatus) -> Span<'static> {
    let color = if status.is_open() { C_BUY } else { C_SELL };
    Span::styled(
        format!("● {}", status.as_str()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// Full quote card for the selected symbol
pub fn render_quote_card(f: &mut Frame, area: Rect, panel: &QuotePanel, show_market_badge: bool) {
    let quote = panel.quote();
    let entry = panel.entry();
    let positive = quote.is_positive();
    let dir = direction_color(quote.change);

    let block = Block::default()
        .title(format!(" {} ({}) ", entry.label, entry.symbol))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dir));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let arrow = if positive { "▲" } else { "▼" };
    let (badge, trend) = if positive {
        (" BUY Signal ", "Bullish")
    } else {
        (" SELL Signal ", "Bearish")
    };

    let mut header = vec![
        Span::styled(format_price(quote.price), palette::value()),
        Span::styled(
            format!(
                "  {} {} ({})",
                arrow,
                format_signed(quote.change),
                format_signed_pct(quote.change_percent)
            ),
            Style::default().fg(dir),
        ),
        Span::raw("  "),
        Span::styled(
            badge,
            Style::default().fg(C_DIM).bg(dir).add_modifier(Modifier::BOLD),
        ),
    ];
    if show_market_badge {
        header.push(Span::raw("  "));
        header.push(market_status_span(panel.market_status()));
    }

    let stat = |name: &'static str, value: String| {
        vec![
            Span::styled(format!("{:<11}", name), palette::label()),
            Span::styled(format!("{:<14}", value), palette::value()),
        ]
    };

    let mut row1 = stat("Volume", format_volume(quote.volume));
    row1.extend(stat("Avg Volume", format_volume(quote.avg_volume)));
    let mut row2 = stat("Day High", format_price(quote.day_high));
    row2.extend(stat("Day Low", format_price(quote.day_low)));
    let mut row3 = stat("Market Cap", format_money_compact(quote.market_cap));
    row3.extend(stat("P/E Ratio", format!("{:.2}", quote.pe_ratio)));

    let lines = vec![
        Line::from(header),
        Line::from(""),
        Line::from(row1),
        Line::from(row2),
        Line::from(row3),
        Line::from(""),
        Line::from(vec![
            Span::styled("Volatility ", palette::label()),
            Span::styled("Medium", Style::default().fg(C_NEUTRAL)),
            Span::styled("   Liquidity ", palette::label()),
            Span::styled("High", Style::default().fg(C_BUY)),
            Span::styled("   Trend ", palette::label()),
            Span::styled(trend, Style::default().fg(dir).add_modifier(Modifier::BOLD)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

/// Cards for the first few watchlist symbols
pub fn render_mini_quotes(
    f: &mut Frame,
    area: Rect,
    entries: &[WatchlistEntry],
    board: &MiniQuoteBoard,
    selected: &str,
) {
    let shown: Vec<&WatchlistEntry> = entries.iter().take(MINI_QUOTE_CARDS).collect();
    if shown.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = shown
        .iter()
        .map(|_| Constraint::Ratio(1, shown.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (entry, cell) in shown.into_iter().zip(cells.iter()) {
        let mini = board.get(&entry.symbol);
        let border = if entry.symbol == selected {
            C_ACCENT
        } else {
            C_DIM
        };
        let block = Block::default()
            .title(format!(" {} ", entry.symbol))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let lines = vec![
            Line::from(Span::styled(entry.label.clone(), palette::label())),
            Line::from(Span::styled(format_price(mini.price), palette::value())),
            Line::from(Span::styled(
                format!(
                    "{} ({})",
                    format_signed(mini.change),
                    format_signed_pct(mini.change_percent)
                ),
                Style::default().fg(direction_color(mini.change)),
            )),
            Line::from(vec![
                Span::styled("Vol ", palette::label()),
                Span::styled(format_volume(mini.volume), Style::default().fg(C_DIM)),
            ]),
        ];
        f.render_widget(Paragraph::new(lines).block(block), *cell);
    }
}
