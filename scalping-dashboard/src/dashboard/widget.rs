//! Top-level layout: header, tabs, watchlist, active tab body, help line

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::state::{Dashboard, Tab};
use crate::panels::fundamentals::render_fundamentals;
use crate::panels::history::render_history;
use crate::panels::options::render_options;
use crate::panels::palette::{self, C_ACCENT, C_DIM, C_HEADER};
use crate::panels::quote::{market_status_span, render_mini_quotes, render_quote_card};
use crate::panels::risk::{render_risk_compact, render_risk_detailed};
use crate::panels::watchlist::{render_selector, render_watchlist_bar};

pub fn render_dashboard(f: &mut Frame, dash: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], dash);
    render_tabs(f, chunks[1], dash.tab());
    render_watchlist_bar(f, chunks[2], dash.watchlist());

    let status = dash.quote().market_status();
    match dash.tab() {
        Tab::Overview => render_overview(f, chunks[3], dash),
        Tab::Historical => render_history(
            f,
            chunks[3],
            dash.history(),
            status,
            dash.show_market_badge(),
        ),
        Tab::RiskSignals => render_risk_detailed(f, chunks[3]),
        Tab::Fundamentals => {
            render_fundamentals(f, chunks[3], dash.fundamentals(), dash.watchlist().selected())
        }
        Tab::Options => render_options(f, chunks[3], dash.options()),
    }

    render_help(f, chunks[4], dash.tab());

    if dash.selector().is_open() {
        render_selector(f, f.area(), dash.selector(), dash.watchlist().selected());
    }
}

fn render_header(f: &mut Frame, area: Rect, dash: &Dashboard) {
    let mut spans = vec![
        Span::styled(" SCALPING DASHBOARD ", palette::title()),
        Span::styled("│ ", Style::default().fg(C_DIM)),
        Span::styled(
            dash.watchlist().selected().to_string(),
            Style::default().fg(C_ACCENT).add_modifier(Modifier::BOLD),
        ),
    ];
    if dash.show_market_badge() {
        spans.push(Span::raw("  "));
        spans.push(market_status_span(dash.quote().market_status()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(f: &mut Frame, area: Rect, current: Tab) {
    let titles: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(C_DIM)),
        )
        .style(Style::default().fg(C_DIM))
        .highlight_style(Style::default().fg(C_HEADER).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn render_overview(f: &mut Frame, area: Rect, dash: &Dashboard) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(6)])
        .split(columns[0]);

    render_quote_card(f, left[0], dash.quote(), dash.show_market_badge());
    render_mini_quotes(
        f,
        left[1],
        dash.watchlist().entries(),
        dash.minis(),
        dash.watchlist().selected(),
    );
    render_risk_compact(f, columns[1]);
}

fn render_help(f: &mut Frame, area: Rect, tab: Tab) {
    let extra = match tab {
        Tab::Historical => "  r/d/w/m range",
        Tab::Options => "  e expiry  c/p side",
        _ => "",
    };
    let text = format!(
        " q quit  Tab/1-5 tabs  ←/→ symbol  / search  a add  x remove{}",
        extra
    );
    f.render_widget(Paragraph::new(Span::styled(text, palette::label())), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::DashboardConfig;
    use crate::shared::source::SyntheticSource;
    use chrono::{NaiveDate, NaiveDateTime};
    use ratatui::{backend::TestBackend, Terminal};

    fn saturday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 13)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn draw(dash: &Dashboard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, dash)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn dashboard(config: &DashboardConfig) -> Dashboard {
        Dashboard::with_clock(config, Box::new(SyntheticSource::with_seed(5)), saturday)
    }

    #[test]
    fn test_every_tab_renders() {
        let mut dash = dashboard(&DashboardConfig::default());
        for tab in Tab::ALL {
            dash.set_tab(tab);
            let text = draw(&dash);
            assert!(text.contains("SCALPING DASHBOARD"), "{:?}", tab);
        }
    }

    #[test]
    fn test_overview_shows_quote_and_market_badge() {
        let dash = dashboard(&DashboardConfig::default());
        let text = draw(&dash);
        assert!(text.contains("Apple (AAPL)"));
        assert!(text.contains("Market Closed"));
        assert!(text.contains("RISK SIGNALS"));
    }

    #[test]
    fn test_market_badge_can_be_hidden() {
        let config = DashboardConfig::default().with_market_status_badge(false);
        let dash = dashboard(&config);
        assert!(!draw(&dash).contains("Market Closed"));
    }
}
