//! Mini-quote grid for the overview

use std::collections::HashMap;

use tracing::debug;

use crate::shared::source::MarketDataSource;
use crate::shared::types::{MiniQuote, WatchlistEntry};

/// Number of cards shown on the overview
pub const MINI_QUOTE_CARDS: usize = 4;

/// Compact quotes keyed by symbol
#[derive(Debug, Clone, Default)]
pub struct MiniQuoteBoard {
    quotes: HashMap<String, MiniQuote>,
}

impl MiniQuoteBoard {
    pub fn new(entries: &[WatchlistEntry], source: &mut dyn MarketDataSource) -> Self {
        let mut board = Self::default();
        board.regenerate(entries, source);
        board
    }

    /// Draw a fresh quote for every entry, dropping symbols no longer tracked
    pub fn regenerate(&mut self, entries: &[WatchlistEntry], source: &mut dyn MarketDataSource) {
        self.quotes = entries
            .iter()
            .map(|entry| (entry.symbol.clone(), source.mini_quote(entry)))
            .collect();
        debug!("Regenerated {} mini quotes", self.quotes.len());
    }

    /// Draw a quote for `entry` unless one already exists
    pub fn ensure(&mut self, entry: &WatchlistEntry, source: &mut dyn MarketDataSource) {
        if !self.contains(&entry.symbol) {
            self.quotes.insert(entry.symbol.clone(), source.mini_quote(entry));
        }
    }

    /// Quote for `symbol`, zero placeholder when missing
    pub fn get(&self, symbol: &str) -> MiniQuote {
        self.quotes.get(symbol).copied().unwrap_or_default()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.quotes.contains_key(symbol)
    }
}
