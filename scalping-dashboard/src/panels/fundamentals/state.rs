//! Fundamentals rows, one per watchlist symbol

use tracing::debug;

use crate::shared::source::MarketDataSource;
use crate::shared::types::FundamentalRow;

#[derive(Debug, Clone, Default)]
pub struct FundamentalsPanel {
    symbols: Vec<String>,
    rows: Vec<FundamentalRow>,
}

impl FundamentalsPanel {
    pub fn new(symbols: &[String], source: &mut dyn MarketDataSource) -> Self {
        let mut panel = Self::default();
        panel.regenerate(symbols, source);
        panel
    }

    /// Regenerate every row when the symbol list differs from the last one
    ///
    /// Returns true when rows were redrawn. Selection changes alone never
    /// trigger a redraw.
    pub fn sync(&mut self, symbols: &[String], source: &mut dyn MarketDataSource) -> bool {
        if self.symbols.as_slice() == symbols {
            return false;
        }
        self.regenerate(symbols, source);
        true
    }

    fn regenerate(&mut self, symbols: &[String], source: &mut dyn MarketDataSource) {
        self.symbols = symbols.to_vec();
        self.rows = symbols.iter().map(|s| source.fundamentals(s)).collect();
        debug!("Regenerated fundamentals for {} symbols", self.rows.len());
    }

    pub fn rows(&self) -> &[FundamentalRow] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::source::SyntheticSource;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_row_per_symbol_in_order() {
        let mut source = SyntheticSource::with_seed(41);
        let panel = FundamentalsPanel::new(&symbols(&["AAPL", "^GSPC", "MSFT"]), &mut source);
        let order: Vec<_> = panel.rows().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(order, vec!["AAPL", "^GSPC", "MSFT"]);
    }

    #[test]
    fn test_sync_only_on_symbol_list_change() {
        let mut source = SyntheticSource::with_seed(42);
        let list = symbols(&["AAPL", "MSFT"]);
        let mut panel = FundamentalsPanel::new(&list, &mut source);
        let before = panel.rows().to_vec();

        assert!(!panel.sync(&list, &mut source));
        assert_eq!(panel.rows(), before.as_slice());

        assert!(panel.sync(&symbols(&["AAPL", "MSFT", "NVDA"]), &mut source));
        assert_eq!(panel.rows().len(), 3);
        // Independent draws: existing rows are redrawn too
        assert_ne!(panel.rows()[0], before[0]);
    }
}
