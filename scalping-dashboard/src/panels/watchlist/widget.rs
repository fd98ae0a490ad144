//! Watchlist strip and selector popup

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::selector::{Selector, SelectorItem};
use super::state::Watchlist;
use crate::panels::palette::{self, C_ACCENT, C_BRIGHT, C_DIM};
use crate::shared::config::SelectorStyle;

/// One-line strip of watchlist buttons; the selected entry is highlighted
pub fn render_watchlist_bar(f: &mut Frame, area: Rect, watchlist: &Watchlist) {
    let block = Block::default()
        .title(" WATCHLIST ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_DIM));

    let mut spans = Vec::new();
    for entry in watchlist.entries() {
        let selected = entry.symbol == watchlist.selected();
        let style = if selected {
            Style::default()
                .fg(C_BRIGHT)
                .bg(C_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(C_BRIGHT)
        };
        spans.push(Span::styled(
            format!(" {} ", watchlist.display_label(&entry.symbol)),
            style,
        ));
        if entry.category.is_index() {
            spans.push(Span::styled("•", Style::default().fg(C_ACCENT)));
        }
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Selector popup centered over `area`
pub fn render_selector(f: &mut Frame, area: Rect, selector: &Selector, selected: &str) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let title = match selector.style() {
        SelectorStyle::Dropdown => " Market Symbol or Index ",
        SelectorStyle::FreeText => " Add Symbol ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(C_ACCENT));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let placeholder = match selector.style() {
        SelectorStyle::Dropdown => "Search stocks and indices...",
        SelectorStyle::FreeText => "Enter symbol (e.g. AAPL, ^GSPC)",
    };
    let input = if selector.query().is_empty() {
        Span::styled(placeholder, palette::label())
    } else {
        Span::styled(selector.query(), palette::value())
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled("> ", Style::default().fg(C_ACCENT)), input])),
        chunks[0],
    );

    let results = selector.results();
    let items: Vec<ListItem> = if results.is_empty() {
        vec![ListItem::new(Span::styled("No results found.", palette::label()))]
    } else {
        results
            .iter()
            .enumerate()
            .map(|(i, item)| result_row(item, i == selector.highlighted(), selected))
            .collect()
    };
    f.render_widget(List::new(items), chunks[1]);

    f.render_widget(
        Paragraph::new(Span::styled(
            "Enter: add & select  ↑/↓: move  Esc: close",
            palette::label(),
        )),
        chunks[2],
    );
}

fn result_row(item: &SelectorItem, highlighted: bool, selected: &str) -> ListItem<'static> {
    let check = if item.symbol() == selected {
        "✓ "
    } else {
        "  "
    };
    let mut spans = vec![Span::styled(check, Style::default().fg(C_ACCENT))];
    match item {
        SelectorItem::Catalog(entry) if entry.category.is_index() => {
            spans.push(Span::styled(entry.label, Style::default().fg(C_BRIGHT)));
            spans.push(Span::styled(" [Index]", Style::default().fg(C_ACCENT)));
        }
        SelectorItem::Catalog(entry) => {
            spans.push(Span::styled(
                format!("{} ({})", entry.label, entry.symbol),
                Style::default().fg(C_BRIGHT),
            ));
        }
        SelectorItem::Custom(symbol) => {
            spans.push(Span::styled(
                format!("Add \"{}\"", symbol),
                Style::default().fg(C_BRIGHT),
            ));
        }
    }

    let line = Line::from(spans);
    if highlighted {
        ListItem::new(line).style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        ListItem::new(line)
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
