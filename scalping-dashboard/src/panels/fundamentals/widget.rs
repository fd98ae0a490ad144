//! Fundamentals comparison table and valuation cards

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::state::FundamentalsPanel;
use crate::panels::palette::{
    self, direction_color, valuation_color, C_ACCENT, C_BRIGHT, C_DIM, C_HEADER,
};
use crate::shared::format::{format_market_cap_billions, format_price};
use crate::shared::types::FundamentalRow;

/// Valuation cards shown under the table
pub const VALUATION_CARDS: usize = 6;

const HEADERS: [&str; 11] = [
    "Symbol", "P/E", "Mkt Cap", "Rev Growth", "Margin", "D/E", "ROE", "Div Yield", "Beta",
    "Book Val", "EPS",
];

pub fn render_fundamentals(f: &mut Frame, area: Rect, panel: &FundamentalsPanel, selected: &str) {
    let card_rows = panel.rows().len().min(VALUATION_CARDS).div_ceil(3) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(card_rows * 4)])
        .split(area);

    render_table(f, chunks[0], panel, selected);
    render_cards(f, chunks[1], panel);
}

fn render_table(f: &mut Frame, area: Rect, panel: &FundamentalsPanel, selected: &str) {
    let header = Row::new(HEADERS.iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(C_HEADER).add_modifier(Modifier::BOLD))
    }))
    .height(1);

    let rows = panel.rows().iter().map(|row| {
        let symbol_style = if row.symbol == selected {
            Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(C_BRIGHT)
        };
        Row::new(vec![
            Cell::from(row.symbol.clone()).style(symbol_style),
            Cell::from(format!("{:.2}", row.pe_ratio))
                .style(Style::default().fg(valuation_color(row.valuation()))),
            Cell::from(format_market_cap_billions(row.market_cap)),
            Cell::from(format!("{:+.2}%", row.revenue_growth))
                .style(Style::default().fg(direction_color(row.revenue_growth))),
            Cell::from(format!("{:.1}%", row.profit_margin)),
            Cell::from(format!("{:.2}", row.debt_to_equity)),
            Cell::from(format!("{:.1}%", row.roe)),
            Cell::from(format!("{:.2}%", row.dividend_yield)),
            Cell::from(format!("{:.2}", row.beta)),
            Cell::from(format_price(row.book_value)),
            Cell::from(format_price(row.eps)),
        ])
        .style(Style::default().fg(C_BRIGHT))
        .height(1)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" FUNDAMENTALS ")
            .border_style(Style::default().fg(C_DIM)),
    );
    f.render_widget(table, area);
}

fn render_cards(f: &mut Frame, area: Rect, panel: &FundamentalsPanel) {
    let rows: Vec<&FundamentalRow> = panel.rows().iter().take(VALUATION_CARDS).collect();
    if rows.is_empty() || area.height == 0 {
        return;
    }

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.chunks(3).map(|_| Constraint::Length(4)).collect::<Vec<_>>())
        .split(area);

    for (chunk, line_area) in rows.chunks(3).zip(lines.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*line_area);

        for (row, cell) in chunk.iter().zip(cells.iter()) {
            let valuation = row.valuation();
            let color = valuation_color(valuation);
            let block = Block::default()
                .title(format!(" {} ", row.symbol))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            let text = vec![
                Line::from(vec![
                    Span::styled("P/E ", palette::label()),
                    Span::styled(format!("{:.2}", row.pe_ratio), palette::value()),
                ]),
                Line::from(Span::styled(
                    valuation.as_str(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
            ];
            f.render_widget(Paragraph::new(text).block(block), *cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::source::SyntheticSource;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_renders_table_and_cards() {
        let symbols: Vec<String> = ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "^GSPC", "^FTSE"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut source = SyntheticSource::with_seed(43);
        let panel = FundamentalsPanel::new(&symbols, &mut source);

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| render_fundamentals(f, f.area(), &panel, "AAPL"))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains("FUNDAMENTALS"));
        assert!(text.contains("^FTSE"));
        let valued = ["Undervalued", "Fair", "Overvalued"];
        assert!(valued.iter().any(|v| text.contains(v)));
    }
}
