//! Symbol selector input state
//!
//! One component covers both input affordances: a searchable dropdown over
//! the catalog, or a plain free-text box. Either way a submit yields the
//! symbol to add and select.

use super::catalog::{CatalogItem, CATALOG};
use crate::shared::config::{normalize_symbol, SelectorStyle};
use crate::shared::types::Category;

/// A selectable row in the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorItem {
    Catalog(&'static CatalogItem),
    /// Whatever the user typed, upper-cased
    Custom(String),
}

impl SelectorItem {
    pub fn symbol(&self) -> &str {
        match self {
            SelectorItem::Catalog(item) => item.symbol,
            SelectorItem::Custom(symbol) => symbol,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    style: SelectorStyle,
    open: bool,
    query: String,
    highlighted: usize,
}

impl Selector {
    pub fn new(style: SelectorStyle) -> Self {
        Self {
            style,
            open: false,
            query: String::new(),
            highlighted: 0,
        }
    }

    pub fn style(&self) -> SelectorStyle {
        self.style
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.highlighted = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.highlighted = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.highlighted = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.highlighted = 0;
    }

    pub fn move_down(&mut self) {
        let len = self.results().len();
        if len > 0 {
            self.highlighted = (self.highlighted + 1).min(len - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Matching rows: indices, then stocks, then the custom entry
    ///
    /// Free-text mode only ever offers the custom entry.
    pub fn results(&self) -> Vec<SelectorItem> {
        let custom = normalize_symbol(&self.query);
        let mut items = Vec::new();

        if self.style == SelectorStyle::Dropdown {
            for category in [Category::Index, Category::Stock] {
                items.extend(
                    CATALOG
                        .iter()
                        .filter(|item| item.category == category && item.matches(self.query.trim()))
                        .map(SelectorItem::Catalog),
                );
            }
        }

        if !custom.is_empty() {
            items.push(SelectorItem::Custom(custom));
        }
        items
    }

    /// Resolve the highlighted row (or typed text) and close the selector
    pub fn submit(&mut self) -> Option<String> {
        let symbol = match self.style {
            SelectorStyle::Dropdown => self
                .results()
                .get(self.highlighted)
                .map(|item| item.symbol().to_string()),
            SelectorStyle::FreeText => Some(normalize_symbol(&self.query)),
        }
        .filter(|symbol| !symbol.is_empty());

        self.close();
        symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(style: SelectorStyle, text: &str) -> Selector {
        let mut selector = Selector::new(style);
        selector.open();
        text.chars().for_each(|c| selector.push_char(c));
        selector
    }

    #[test]
    fn test_empty_query_lists_whole_catalog_indices_first() {
        let selector = typed(SelectorStyle::Dropdown, "");
        let results = selector.results();
        assert_eq!(results.len(), CATALOG.len());
        assert_eq!(results[0].symbol(), "^GDAXI");
        assert_eq!(results[7].symbol(), "AAPL");
    }

    #[test]
    fn test_query_filters_and_appends_custom() {
        let selector = typed(SelectorStyle::Dropdown, "dow");
        let symbols: Vec<_> = selector.results().iter().map(|r| r.symbol().to_string()).collect();
        assert_eq!(symbols, vec!["^DJI", "DOW"]);
    }

    #[test]
    fn test_submit_highlighted_catalog_item() {
        let mut selector = typed(SelectorStyle::Dropdown, "a");
        selector.move_down();
        let results = selector.results();
        let expected = results[1].symbol().to_string();
        assert_eq!(selector.submit(), Some(expected));
        assert!(!selector.is_open());
        assert!(selector.query().is_empty());
    }

    #[test]
    fn test_submit_custom_entry() {
        let mut selector = typed(SelectorStyle::Dropdown, "pltr");
        assert_eq!(selector.results(), vec![SelectorItem::Custom("PLTR".into())]);
        assert_eq!(selector.submit(), Some("PLTR".to_string()));
    }

    #[test]
    fn test_highlight_is_clamped() {
        let mut selector = typed(SelectorStyle::Dropdown, "nvidia");
        for _ in 0..10 {
            selector.move_down();
        }
        // NVIDIA + custom entry
        assert_eq!(selector.highlighted(), 1);
        selector.move_up();
        selector.move_up();
        assert_eq!(selector.highlighted(), 0);
    }

    #[test]
    fn test_free_text_submits_typed_symbol() {
        let mut selector = typed(SelectorStyle::FreeText, " amd ");
        assert_eq!(selector.results().len(), 1);
        assert_eq!(selector.submit(), Some("AMD".to_string()));
    }

    #[test]
    fn test_free_text_empty_submit_is_ignored() {
        let mut selector = typed(SelectorStyle::FreeText, "  ");
        assert_eq!(selector.submit(), None);
    }

    #[test]
    fn test_backspace_edits_query() {
        let mut selector = typed(SelectorStyle::FreeText, "MSFTX");
        selector.backspace();
        assert_eq!(selector.query(), "MSFT");
    }
}
