//! Built-in symbol catalog offered by the dropdown selector

use crate::shared::types::{Category, WatchlistEntry};

/// Known index or stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub symbol: &'static str,
    pub label: &'static str,
    pub category: Category,
}

impl CatalogItem {
    const fn index(symbol: &'static str, label: &'static str) -> Self {
        Self {
            symbol,
            label,
            category: Category::Index,
        }
    }

    const fn stock(symbol: &'static str, label: &'static str) -> Self {
        Self {
            symbol,
            label,
            category: Category::Stock,
        }
    }

    pub fn to_entry(&self) -> WatchlistEntry {
        WatchlistEntry::new(self.symbol, self.label, self.category)
    }

    /// Case-insensitive substring match on symbol or label
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.symbol.to_lowercase().contains(&query) || self.label.to_lowercase().contains(&query)
    }
}

pub static CATALOG: [CatalogItem; 14] = [
    CatalogItem::index("^GDAXI", "DAX 40"),
    CatalogItem::index("^FTSE", "FTSE 100"),
    CatalogItem::index("^GSPC", "S&P 500"),
    CatalogItem::index("^DJI", "Dow Jones"),
    CatalogItem::index("^IXIC", "NASDAQ"),
    CatalogItem::index("^N225", "Nikkei 225"),
    CatalogItem::index("^HSI", "Hang Seng"),
    CatalogItem::stock("AAPL", "Apple"),
    CatalogItem::stock("MSFT", "Microsoft"),
    CatalogItem::stock("GOOGL", "Google"),
    CatalogItem::stock("AMZN", "Amazon"),
    CatalogItem::stock("TSLA", "Tesla"),
    CatalogItem::stock("META", "Meta"),
    CatalogItem::stock("NVDA", "NVIDIA"),
];

pub fn lookup(symbol: &str) -> Option<&'static CatalogItem> {
    CATALOG.iter().find(|item| item.symbol == symbol)
}

/// Catalog entry for known symbols, synthesized entry otherwise
pub fn resolve(symbol: &str) -> WatchlistEntry {
    lookup(symbol)
        .map(CatalogItem::to_entry)
        .unwrap_or_else(|| WatchlistEntry::synthesize(symbol))
}

/// Display label, falling back to the raw symbol
pub fn display_label(symbol: &str) -> &str {
    lookup(symbol).map(|item| item.label).unwrap_or(symbol)
}
