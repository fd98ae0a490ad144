//! Watchlist and selection state

use tracing::{debug, info};

use super::catalog;
use crate::shared::config::normalize_symbol;
use crate::shared::types::WatchlistEntry;

const FALLBACK_SYMBOL: &str = "AAPL";

/// Ordered list of tracked symbols plus the current selection
///
/// Never empty; the selected symbol is always one of the entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
    selected: String,
}

impl Watchlist {
    pub fn new<S: AsRef<str>>(symbols: &[S], selected: &str) -> Self {
        let mut watchlist = Self {
            entries: Vec::with_capacity(symbols.len() + 1),
            selected: String::new(),
        };
        for symbol in symbols {
            watchlist.add(symbol.as_ref());
        }

        let selected = normalize_symbol(selected);
        let selected = if selected.is_empty() {
            watchlist
                .entries
                .first()
                .map(|e| e.symbol.clone())
                .unwrap_or_else(|| FALLBACK_SYMBOL.to_string())
        } else {
            selected
        };
        watchlist.add(&selected);
        watchlist.selected = selected;
        watchlist
    }

    /// Append `symbol` unless already tracked; returns true when added
    pub fn add(&mut self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() || self.contains(&symbol) {
            return false;
        }
        let entry = catalog::resolve(&symbol);
        info!("Added {} ({}) to watchlist", entry.symbol, entry.category);
        self.entries.push(entry);
        true
    }

    /// Select a tracked symbol; returns true when the selection changed
    pub fn select(&mut self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        if symbol == self.selected || !self.contains(&symbol) {
            return false;
        }
        debug!("Selected {}", symbol);
        self.selected = symbol;
        true
    }

    /// Remove a tracked symbol
    ///
    /// The last entry is kept. When the selected entry goes, the selection
    /// moves to the entry that took its place (or the new last entry).
    pub fn remove(&mut self, symbol: &str) -> bool {
        let symbol = normalize_symbol(symbol);
        if self.entries.len() <= 1 {
            return false;
        }
        let Some(index) = self.position(&symbol) else {
            return false;
        };

        self.entries.remove(index);
        if self.selected == symbol {
            let next = index.min(self.entries.len() - 1);
            self.selected = self.entries[next].symbol.clone();
        }
        info!("Removed {} from watchlist", symbol);
        true
    }

    /// Move the selection by `step` entries, wrapping around
    pub fn cycle(&mut self, step: isize) -> bool {
        let len = self.entries.len() as isize;
        let current = self.position(&self.selected).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        let symbol = self.entries[next].symbol.clone();
        self.select(&symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.iter().any(|e| e.symbol == symbol)
    }

    fn position(&self, symbol: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.symbol == symbol)
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn symbols(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.symbol.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn selected_entry(&self) -> WatchlistEntry {
        self.entries
            .iter()
            .find(|e| e.symbol == self.selected)
            .cloned()
            .unwrap_or_else(|| catalog::resolve(&self.selected))
    }

    /// Label for display, catalog name when known
    pub fn display_label<'a>(&self, symbol: &'a str) -> &'a str {
        catalog::display_label(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Category;

    fn default_list() -> Watchlist {
        Watchlist::new(&["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "^GSPC", "^FTSE"], "AAPL")
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut list = default_list();
        let before = list.len();
        for symbol in ["AAPL", "aapl", " ^GSPC ", "MSFT"] {
            assert!(!list.add(symbol));
            assert_eq!(list.len(), before);
        }
    }

    #[test]
    fn test_add_unknown_symbol_synthesizes_entry() {
        let mut list = default_list();
        assert!(list.add("^stoxx"));
        let entry = list.entries().last().unwrap();
        assert_eq!(entry.symbol, "^STOXX");
        assert_eq!(entry.label, "^STOXX");
        assert_eq!(entry.category, Category::Index);

        assert!(list.add("pltr"));
        assert_eq!(list.entries().last().unwrap().category, Category::Stock);
    }

    #[test]
    fn test_add_ignores_empty_input() {
        let mut list = default_list();
        assert!(!list.add("   "));
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn test_select_requires_membership() {
        let mut list = default_list();
        assert!(!list.select("NVDA"));
        assert_eq!(list.selected(), "AAPL");
        assert!(list.select("msft"));
        assert_eq!(list.selected(), "MSFT");
        assert_eq!(list.selected_entry().label, "Microsoft");
    }

    #[test]
    fn test_new_adds_missing_selection() {
        let list = Watchlist::new(&["AAPL"], "nvda");
        assert_eq!(list.symbols(), vec!["AAPL", "NVDA"]);
        assert_eq!(list.selected(), "NVDA");
    }

    #[test]
    fn test_new_never_empty() {
        let list = Watchlist::new::<&str>(&[], "");
        assert_eq!(list.symbols(), vec!["AAPL"]);
        assert_eq!(list.selected(), "AAPL");
    }

    #[test]
    fn test_remove_selected_moves_selection() {
        let mut list = Watchlist::new(&["AAPL", "MSFT", "TSLA"], "MSFT");
        assert!(list.remove("MSFT"));
        assert_eq!(list.selected(), "TSLA");
        assert!(list.remove("TSLA"));
        assert_eq!(list.selected(), "AAPL");
        // Last entry stays
        assert!(!list.remove("AAPL"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_unselected_keeps_selection() {
        let mut list = default_list();
        assert!(list.remove("^FTSE"));
        assert_eq!(list.selected(), "AAPL");
        assert!(!list.remove("^FTSE"));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut list = Watchlist::new(&["AAPL", "MSFT", "TSLA"], "AAPL");
        list.cycle(-1);
        assert_eq!(list.selected(), "TSLA");
        list.cycle(1);
        assert_eq!(list.selected(), "AAPL");
        list.cycle(2);
        assert_eq!(list.selected(), "TSLA");
    }
}
