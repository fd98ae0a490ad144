//! Dashboard container: tabs, key handling and cross-panel wiring

use chrono::{Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::panels::fundamentals::FundamentalsPanel;
use crate::panels::history::HistoryPanel;
use crate::panels::options::OptionsPanel;
use crate::panels::quote::{MiniQuoteBoard, QuotePanel, QuoteTimings};
use crate::panels::watchlist::{Selector, Watchlist};
use crate::shared::config::DashboardConfig;
use crate::shared::source::MarketDataSource;
use crate::shared::timer::{TimerEvent, TimerSender};
use crate::shared::types::{OptionSide, TimeRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Historical,
    RiskSignals,
    Fundamentals,
    Options,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Historical,
        Tab::RiskSignals,
        Tab::Fundamentals,
        Tab::Options,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Historical => "Historical",
            Tab::RiskSignals => "Risk Signals",
            Tab::Fundamentals => "Fundamentals",
            Tab::Options => "Options",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Tab for a '1'..='5' key
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Tab::ALL.get(i).copied())
    }
}

/// Outcome of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
}

impl From<&DashboardConfig> for QuoteTimings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            drift_interval: config.drift_interval,
            market_status_interval: config.market_status_interval,
            pause_drift_when_closed: config.pause_drift_when_closed,
        }
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Owns every panel and the data source; the render loop is its only mutator
pub struct Dashboard {
    source: Box<dyn MarketDataSource>,
    clock: fn() -> NaiveDateTime,
    show_market_badge: bool,
    tab: Tab,
    watchlist: Watchlist,
    selector: Selector,
    quote: QuotePanel,
    minis: MiniQuoteBoard,
    history: HistoryPanel,
    fundamentals: FundamentalsPanel,
    options: OptionsPanel,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig, source: Box<dyn MarketDataSource>) -> Self {
        Self::with_clock(config, source, local_now)
    }

    /// Dashboard reading wall-clock time from `clock`
    pub fn with_clock(
        config: &DashboardConfig,
        mut source: Box<dyn MarketDataSource>,
        clock: fn() -> NaiveDateTime,
    ) -> Self {
        let now = clock();
        let watchlist = Watchlist::new(&config.watchlist, &config.selected);
        let entry = watchlist.selected_entry();

        let quote = QuotePanel::new(entry.clone(), source.as_mut(), config.into(), now);
        let minis = MiniQuoteBoard::new(watchlist.entries(), source.as_mut());
        let history = HistoryPanel::new(&entry.symbol, TimeRange::default(), source.as_mut(), now);
        let fundamentals = FundamentalsPanel::new(&watchlist.symbols(), source.as_mut());

        info!(
            "Dashboard ready: {} symbols, {} selected",
            watchlist.len(),
            watchlist.selected()
        );

        Self {
            source,
            clock,
            show_market_badge: config.show_market_status_badge,
            tab: Tab::default(),
            watchlist,
            selector: Selector::new(config.selector_style),
            quote,
            minis,
            history,
            fundamentals,
            options: OptionsPanel::new(),
        }
    }

    /// Arm quote timers; events arrive on the receiving half of `tx`
    pub fn attach_timers(&mut self, tx: TimerSender) {
        self.quote.attach_timers(tx);
    }

    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        let now = (self.clock)();
        self.quote.on_timer(event, self.source.as_mut(), now)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if self.selector.is_open() {
            self.handle_selector_key(key);
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Tab => self.set_tab(self.tab.next()),
            KeyCode::BackTab => self.set_tab(self.tab.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(tab) = Tab::from_digit(c) {
                    self.set_tab(tab);
                }
            }
            KeyCode::Left => self.cycle_selection(-1),
            KeyCode::Right => self.cycle_selection(1),
            KeyCode::Char('/') => self.selector.open(),
            KeyCode::Char('a') => {
                let symbol = self.watchlist.selected().to_string();
                self.add_symbol(&symbol);
            }
            KeyCode::Char('x') => self.remove_selected(),
            _ => self.handle_tab_key(key.code),
        }
        Action::None
    }

    fn handle_selector_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.selector.close(),
            KeyCode::Enter => {
                if let Some(symbol) = self.selector.submit() {
                    self.add_symbol(&symbol);
                }
            }
            KeyCode::Up => self.selector.move_up(),
            KeyCode::Down => self.selector.move_down(),
            KeyCode::Backspace => self.selector.backspace(),
            KeyCode::Char(c) => self.selector.push_char(c),
            _ => {}
        }
    }

    fn handle_tab_key(&mut self, code: KeyCode) {
        match (self.tab, code) {
            (Tab::Historical, KeyCode::Char('r')) => self.set_range(self.history.range().next()),
            (Tab::Historical, KeyCode::Char('d')) => self.set_range(TimeRange::OneDay),
            (Tab::Historical, KeyCode::Char('w')) => self.set_range(TimeRange::OneWeek),
            (Tab::Historical, KeyCode::Char('m')) => self.set_range(TimeRange::OneMonth),
            (Tab::Options, KeyCode::Char('e')) => self.options.cycle_expiry(),
            (Tab::Options, KeyCode::Char('c')) => self.options.set_side(OptionSide::Call),
            (Tab::Options, KeyCode::Char('p')) => self.options.set_side(OptionSide::Put),
            _ => {}
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            debug!("Tab {}", tab.title());
            self.tab = tab;
        }
    }

    pub fn set_range(&mut self, range: TimeRange) {
        let now = (self.clock)();
        if self.history.set_range(range, self.source.as_mut(), now) {
            info!("History range {}", range);
        }
    }

    /// Select a tracked symbol; returns false for unknown or current symbols
    pub fn select_symbol(&mut self, symbol: &str) -> bool {
        if !self.watchlist.select(symbol) {
            return false;
        }
        self.on_selection_changed();
        true
    }

    /// Add `symbol` (no-op when present) and select it
    pub fn add_symbol(&mut self, symbol: &str) {
        if self.watchlist.add(symbol) {
            self.on_watchlist_changed();
        }
        self.select_symbol(symbol);
    }

    /// Drop the selected symbol; the last one is kept
    pub fn remove_selected(&mut self) {
        let selected = self.watchlist.selected().to_string();
        if !self.watchlist.remove(&selected) {
            return;
        }
        self.on_watchlist_changed();
        self.on_selection_changed();
    }

    fn cycle_selection(&mut self, step: isize) {
        if self.watchlist.cycle(step) {
            self.on_selection_changed();
        }
    }

    fn on_selection_changed(&mut self) {
        let now = (self.clock)();
        let entry = self.watchlist.selected_entry();
        self.minis.ensure(&entry, self.source.as_mut());
        self.history
            .set_symbol(&entry.symbol, self.source.as_mut(), now);
        self.quote.select(entry, self.source.as_mut(), now);
    }

    fn on_watchlist_changed(&mut self) {
        self.minis
            .regenerate(self.watchlist.entries(), self.source.as_mut());
        self.fundamentals
            .sync(&self.watchlist.symbols(), self.source.as_mut());
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn quote(&self) -> &QuotePanel {
        &self.quote
    }

    pub fn minis(&self) -> &MiniQuoteBoard {
        &self.minis
    }

    pub fn history(&self) -> &HistoryPanel {
        &self.history
    }

    pub fn fundamentals(&self) -> &FundamentalsPanel {
        &self.fundamentals
    }

    pub fn options(&self) -> &OptionsPanel {
        &self.options
    }

    pub fn show_market_badge(&self) -> bool {
        self.show_market_badge
    }
}
