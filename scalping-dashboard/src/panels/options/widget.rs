//! Options chain table and market summaries

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::chain::{format_expiry, OptionsPanel, EXPIRIES};
use crate::panels::palette::{self, iv_color, C_ACCENT, C_BUY, C_DIM, C_HEADER, C_NEUTRAL, C_SELL};
use crate::shared::format::format_contracts;
use crate::shared::types::{IvTier, OptionSide};

pub fn render_options(f: &mut Frame, area: Rect, panel: &OptionsPanel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(7),
        ])
        .split(area);

    render_controls(f, chunks[0], panel);
    render_chain(f, chunks[1], panel);
    render_summaries(f, chunks[2]);
}

fn render_controls(f: &mut Frame, area: Rect, panel: &OptionsPanel) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let titles: Vec<String> = EXPIRIES.iter().map(|e| format_expiry(e)).collect();
    let expiries = Tabs::new(titles)
        .select(panel.expiry_index())
        .block(
            Block::default()
                .title(" EXPIRY (e) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(C_DIM)),
        )
        .style(Style::default().fg(C_DIM))
        .highlight_style(Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(expiries, halves[0]);

    let side_style = |side: OptionSide| {
        if panel.side() == side {
            Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(C_DIM)
        }
    };
    let sides = Line::from(vec![
        Span::styled(" Calls (c) ", side_style(OptionSide::Call)),
        Span::raw("  "),
        Span::styled(" Puts (p) ", side_style(OptionSide::Put)),
    ]);
    f.render_widget(
        Paragraph::new(sides).block(
            Block::default()
                .title(" SIDE ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(C_DIM)),
        ),
        halves[1],
    );
}

fn render_chain(f: &mut Frame, area: Rect, panel: &OptionsPanel) {
    let header = Row::new(["Strike", "Bid", "Ask", "Volume", "Open Int", "IV"].map(|h| {
        Cell::from(h).style(Style::default().fg(C_HEADER).add_modifier(Modifier::BOLD))
    }))
    .height(1);

    let rows = panel.contracts().iter().map(|c| {
        let tier = IvTier::from_iv(c.implied_volatility);
        Row::new(vec![
            Cell::from(format!("${}", c.strike)).style(palette::value()),
            Cell::from(format!("${:.2}", c.bid)).style(Style::default().fg(C_BUY)),
            Cell::from(format!("${:.2}", c.ask)).style(Style::default().fg(C_SELL)),
            Cell::from(format_contracts(c.volume)),
            Cell::from(format_contracts(c.open_interest)),
            Cell::from(format!("{:.1}%", c.implied_volatility * 100.0))
                .style(Style::default().fg(iv_color(tier))),
        ])
        .height(1)
    });

    let table = Table::new(rows, [Constraint::Length(10); 6])
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    " {} · {} ",
                    panel.side().as_str(),
                    format_expiry(panel.expiry())
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(C_ACCENT)),
        );
    f.render_widget(table, area);
}

fn summary_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM))
}

fn stat_line(name: &'static str, value: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", name), palette::label()),
        Span::styled(value, palette::value()),
    ])
}

fn render_summaries(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let activity = vec![
        stat_line("Call Volume", "4.7K"),
        stat_line("Put Volume", "3.2K"),
        stat_line("Put/Call", "0.68"),
        Line::from(Span::styled("Bullish Sentiment", Style::default().fg(C_BUY))),
    ];
    f.render_widget(
        Paragraph::new(activity).block(summary_block(" OPTIONS ACTIVITY ")),
        columns[0],
    );

    let max_pain = vec![
        stat_line("Max Pain", "$150"),
        stat_line("Current", "$150.23"),
        stat_line("Distance", "$0.23"),
        Line::from(Span::styled("Near Max Pain", Style::default().fg(C_NEUTRAL))),
    ];
    f.render_widget(
        Paragraph::new(max_pain).block(summary_block(" MAX PAIN ")),
        columns[1],
    );

    let iv = vec![
        stat_line("30-Day IV", "28.5%"),
        stat_line("IV Rank", "65%"),
        stat_line("HV vs IV", "-2.3%"),
        Line::from(Span::styled("High IV Environment", Style::default().fg(C_SELL))),
    ];
    f.render_widget(
        Paragraph::new(iv).block(summary_block(" IMPLIED VOLATILITY ")),
        columns[2],
    );
}
