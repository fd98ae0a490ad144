//! History series for the selected symbol and range

use chrono::NaiveDateTime;
use tracing::debug;

use crate::shared::source::MarketDataSource;
use crate::shared::types::{HistoryPoint, TimeRange};

/// Price-series summary, computed by a full scan
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HistorySummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl HistorySummary {
    /// Average, min and max price; zeros for an empty series
    pub fn of(points: &[HistoryPoint]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        let (sum, min, max) = points.iter().fold(
            (0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(sum, min, max), p| (sum + p.price, min.min(p.price), max.max(p.price)),
        );
        Self {
            average: sum / points.len() as f64,
            min,
            max,
        }
    }
}

/// Whole-sequence history: any symbol or range change replaces the series
#[derive(Debug, Clone)]
pub struct HistoryPanel {
    symbol: String,
    range: TimeRange,
    points: Vec<HistoryPoint>,
}

impl HistoryPanel {
    pub fn new(
        symbol: &str,
        range: TimeRange,
        source: &mut dyn MarketDataSource,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            range,
            points: source.history(symbol, range, now),
        }
    }

    /// Point at a new symbol; returns true when the series was regenerated
    pub fn set_symbol(
        &mut self,
        symbol: &str,
        source: &mut dyn MarketDataSource,
        now: NaiveDateTime,
    ) -> bool {
        if self.symbol == symbol {
            return false;
        }
        self.symbol = symbol.to_string();
        self.regenerate(source, now);
        true
    }

    /// Switch range; returns true when the series was regenerated
    pub fn set_range(
        &mut self,
        range: TimeRange,
        source: &mut dyn MarketDataSource,
        now: NaiveDateTime,
    ) -> bool {
        if self.range == range {
            return false;
        }
        self.range = range;
        self.regenerate(source, now);
        true
    }

    fn regenerate(&mut self, source: &mut dyn MarketDataSource, now: NaiveDateTime) {
        self.points = source.history(&self.symbol, self.range, now);
        debug!(
            "History for {} {}: {} points",
            self.symbol,
            self.range,
            self.points.len()
        );
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary::of(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::source::SyntheticSource;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn point(price: f64) -> HistoryPoint {
        HistoryPoint {
            time: String::new(),
            price,
            volume: 0,
            high: price,
            low: price,
        }
    }

    #[test]
    fn test_summary_of_empty_series_is_zero() {
        assert_eq!(HistorySummary::of(&[]), HistorySummary::default());
    }

    #[test]
    fn test_summary_scans_every_point() {
        let summary = HistorySummary::of(&[point(150.0), point(148.5), point(152.5)]);
        assert_eq!(summary.min, 148.5);
        assert_eq!(summary.max, 152.5);
        assert!((summary.average - 150.333_333).abs() < 1e-5);
    }

    #[test]
    fn test_range_change_discards_previous_series() {
        let mut source = SyntheticSource::with_seed(21);
        let mut panel = HistoryPanel::new("AAPL", TimeRange::OneDay, &mut source, now());
        assert_eq!(panel.points().len(), 390);

        assert!(panel.set_range(TimeRange::OneWeek, &mut source, now()));
        assert_eq!(panel.points().len(), 35);
        assert!(panel.points().iter().all(|p| p.time.contains('/')));

        assert!(panel.set_range(TimeRange::OneMonth, &mut source, now()));
        assert_eq!(panel.points().len(), 30);
    }

    #[test]
    fn test_same_range_keeps_series() {
        let mut source = SyntheticSource::with_seed(22);
        let mut panel = HistoryPanel::new("AAPL", TimeRange::OneWeek, &mut source, now());
        let before = panel.points().to_vec();
        assert!(!panel.set_range(TimeRange::OneWeek, &mut source, now()));
        assert!(!panel.set_symbol("AAPL", &mut source, now()));
        assert_eq!(panel.points(), before.as_slice());
    }

    #[test]
    fn test_symbol_change_regenerates() {
        let mut source = SyntheticSource::with_seed(23);
        let mut panel = HistoryPanel::new("AAPL", TimeRange::OneMonth, &mut source, now());
        let before = panel.points().to_vec();
        assert!(panel.set_symbol("MSFT", &mut source, now()));
        assert_eq!(panel.symbol(), "MSFT");
        assert_eq!(panel.points().len(), 30);
        assert_ne!(panel.points(), before.as_slice());
    }
}
