//! Market data source abstraction
//!
//! Every number the dashboard shows comes through [`MarketDataSource`].
//! [`SyntheticSource`] draws them from a pseudo-random generator; a real feed
//! can replace it without touching any panel.

use chrono::{NaiveDateTime, TimeDelta};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::format::round2;
use super::types::{
    Category, FundamentalRow, HistoryPoint, MiniQuote, Quote, TimeRange, WatchlistEntry,
};

/// Starting price of every generated history walk
pub const HISTORY_BASE_PRICE: f64 = 150.0;

/// Provider of quotes, history and fundamentals
pub trait MarketDataSource {
    /// Fresh quote for a newly selected symbol
    fn quote(&mut self, entry: &WatchlistEntry) -> Quote;

    /// Incremental update applied on every drift tick
    ///
    /// Only price, change and volume move; the other fields keep the values
    /// drawn by [`MarketDataSource::quote`].
    fn drift(&mut self, quote: &mut Quote);

    /// Compact quote for the watchlist card grid
    fn mini_quote(&mut self, entry: &WatchlistEntry) -> MiniQuote;

    /// Complete price history for `range`, oldest point first
    fn history(&mut self, symbol: &str, range: TimeRange, now: NaiveDateTime) -> Vec<HistoryPoint>;

    /// Fundamental ratios for one symbol
    fn fundamentals(&mut self, symbol: &str) -> FundamentalRow;
}

/// Pseudo-random data source
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    rng: StdRng,
}

impl SyntheticSource {
    /// Source seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible source
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is provided, OS entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::with_seed).unwrap_or_default()
    }

    /// Symmetric draw in [-0.5, 0.5) scaled by `scale`
    fn jitter(&mut self, scale: f64) -> f64 {
        (self.rng.random::<f64>() - 0.5) * scale
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Base price conditioned on category
///
/// Indices land in [1000, 6000), stocks in [100, 300).
pub fn base_price<R: Rng + ?Sized>(rng: &mut R, category: Category) -> f64 {
    match category {
        Category::Index => rng.random_range(1000.0..6000.0),
        Category::Stock => rng.random_range(100.0..300.0),
    }
}

/// Maximum absolute daily change for a category
fn change_scale(category: Category) -> f64 {
    match category {
        Category::Index => 50.0,
        Category::Stock => 10.0,
    }
}

impl MarketDataSource for SyntheticSource {
    fn quote(&mut self, entry: &WatchlistEntry) -> Quote {
        let price = base_price(&mut self.rng, entry.category);
        let change = self.jitter(change_scale(entry.category));
        Quote {
            price,
            change,
            change_percent: change / price * 100.0,
            volume: self.rng.random_range(10_000_000..100_000_000),
            day_high: price * (1.0 + self.rng.random::<f64>() * 0.02),
            day_low: price * (1.0 - self.rng.random::<f64>() * 0.02),
            market_cap: self.rng.random_range(1e11..3e12),
            pe_ratio: self.rng.random_range(10.0..50.0),
            avg_volume: self.rng.random_range(10_000_000..100_000_000),
        }
    }

    fn drift(&mut self, quote: &mut Quote) {
        quote.price += self.jitter(2.0);
        quote.change += self.jitter(0.5);
        let volume_step = self.jitter(1_000_000.0).floor() as i64;
        quote.volume = quote.volume.saturating_add_signed(volume_step);
    }

    fn mini_quote(&mut self, entry: &WatchlistEntry) -> MiniQuote {
        let price = base_price(&mut self.rng, entry.category);
        let change = self.jitter(change_scale(entry.category));
        MiniQuote {
            price,
            change,
            change_percent: change / price * 100.0,
            volume: self.rng.random_range(10_000_000..100_000_000),
        }
    }

    fn history(
        &mut self,
        _symbol: &str,
        range: TimeRange,
        now: NaiveDateTime,
    ) -> Vec<HistoryPoint> {
        HistoryWalk::new(&mut self.rng, range, now).collect()
    }

    fn fundamentals(&mut self, symbol: &str) -> FundamentalRow {
        let rng = &mut self.rng;
        FundamentalRow {
            symbol: symbol.to_string(),
            pe_ratio: rng.random_range(10.0..50.0),
            market_cap: rng.random_range(100.0..2100.0),
            revenue_growth: (rng.random::<f64>() - 0.5) * 50.0,
            profit_margin: rng.random_range(5.0..35.0),
            debt_to_equity: rng.random_range(0.0..2.0),
            roe: rng.random_range(5.0..30.0),
            dividend_yield: rng.random_range(0.0..5.0),
            beta: rng.random_range(0.5..2.5),
            book_value: rng.random_range(10.0..60.0),
            eps: rng.random_range(1.0..11.0),
        }
    }
}

/// Lazy random walk producing one [`HistoryPoint`] per step
///
/// Finite: yields exactly `range.point_count()` points and then stops.
pub struct HistoryWalk<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    range: TimeRange,
    now: NaiveDateTime,
    price: f64,
    index: usize,
    len: usize,
}

impl<'a, R: Rng + ?Sized> HistoryWalk<'a, R> {
    pub fn new(rng: &'a mut R, range: TimeRange, now: NaiveDateTime) -> Self {
        Self {
            rng,
            range,
            now,
            price: HISTORY_BASE_PRICE,
            index: 0,
            len: range.point_count(),
        }
    }

    fn time_label(&self, steps_back: i64) -> String {
        if self.range.is_intraday() {
            (self.now - TimeDelta::minutes(steps_back))
                .format("%H:%M")
                .to_string()
        } else {
            (self.now - TimeDelta::days(steps_back))
                .format("%m/%d/%Y")
                .to_string()
        }
    }
}

impl<R: Rng + ?Sized> Iterator for HistoryWalk<'_, R> {
    type Item = HistoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }

        self.price += (self.rng.random::<f64>() - 0.5) * 2.0;
        let steps_back = (self.len - self.index) as i64;
        let high = self.price + self.rng.random::<f64>() * 2.0;
        let low = self.price - self.rng.random::<f64>() * 2.0;
        let point = HistoryPoint {
            time: self.time_label(steps_back),
            price: round2(self.price),
            volume: self.rng.random_range(500_000..1_500_000),
            high: round2(high),
            low: round2(low),
        };

        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for HistoryWalk<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_base_price_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let index = base_price(&mut rng, Category::Index);
            assert!((1000.0..6000.0).contains(&index), "index price {index}");
            let stock = base_price(&mut rng, Category::Stock);
            assert!((100.0..300.0).contains(&stock), "stock price {stock}");
        }
    }

    #[test]
    fn test_quote_fields_are_bounded() {
        let mut source = SyntheticSource::with_seed(42);
        let entry = WatchlistEntry::synthesize("AAPL");
        for _ in 0..1_000 {
            let q = source.quote(&entry);
            assert!(q.change.abs() <= 5.0);
            assert!((q.change_percent - q.change / q.price * 100.0).abs() < 1e-9);
            assert!(q.day_high >= q.price && q.day_high <= q.price * 1.02);
            assert!(q.day_low <= q.price && q.day_low >= q.price * 0.98);
            assert!((10.0..50.0).contains(&q.pe_ratio));
            assert!((10_000_000..100_000_000).contains(&q.volume));
        }
    }

    #[test]
    fn test_drift_only_moves_price_change_volume() {
        let mut source = SyntheticSource::with_seed(1);
        let entry = WatchlistEntry::synthesize("^GSPC");
        let original = source.quote(&entry);
        let mut drifted = original.clone();
        source.drift(&mut drifted);

        assert!((drifted.price - original.price).abs() <= 1.0);
        assert!((drifted.change - original.change).abs() <= 0.25);
        assert!(drifted.volume.abs_diff(original.volume) <= 500_000);
        assert_eq!(drifted.day_high, original.day_high);
        assert_eq!(drifted.day_low, original.day_low);
        assert_eq!(drifted.market_cap, original.market_cap);
        assert_eq!(drifted.pe_ratio, original.pe_ratio);
        assert_eq!(drifted.avg_volume, original.avg_volume);
        assert_eq!(drifted.change_percent, original.change_percent);
    }

    #[test]
    fn test_drift_volume_saturates_at_zero() {
        let mut source = SyntheticSource::with_seed(3);
        let mut quote = Quote {
            price: 0.0,
            change: 0.0,
            change_percent: 0.0,
            volume: 0,
            day_high: 0.0,
            day_low: 0.0,
            market_cap: 0.0,
            pe_ratio: 0.0,
            avg_volume: 0,
        };
        for _ in 0..100 {
            source.drift(&mut quote);
        }
        // u64 volume can not go negative
        assert!(quote.volume <= 50_000_000);
    }

    #[test]
    fn test_history_lengths() {
        let mut source = SyntheticSource::with_seed(9);
        for range in TimeRange::ALL {
            let points = source.history("MSFT", range, noon());
            assert_eq!(points.len(), range.point_count());
        }
    }

    #[test]
    fn test_history_walk_is_exact_size() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut walk = HistoryWalk::new(&mut rng, TimeRange::OneWeek, noon());
        assert_eq!(walk.len(), 35);
        walk.next();
        assert_eq!(walk.len(), 34);
        assert_eq!(walk.count(), 34);
    }

    #[test]
    fn test_history_labels() {
        let mut source = SyntheticSource::with_seed(11);

        let intraday = source.history("AAPL", TimeRange::OneDay, noon());
        // First point is 390 minutes before noon
        assert_eq!(intraday[0].time, "05:30");
        assert_eq!(intraday.last().unwrap().time, "11:59");

        let monthly = source.history("AAPL", TimeRange::OneMonth, noon());
        assert_eq!(monthly[0].time, "12/16/2023");
        assert_eq!(monthly.last().unwrap().time, "01/14/2024");
    }

    #[test]
    fn test_history_points_are_finite_and_ordered() {
        let mut source = SyntheticSource::with_seed(13);
        for point in source.history("TSLA", TimeRange::OneDay, noon()) {
            assert!(point.price.is_finite());
            assert!(point.high >= point.price - 0.01);
            assert!(point.low <= point.price + 0.01);
            assert!((500_000..1_500_000).contains(&point.volume));
        }
    }

    #[test]
    fn test_fundamentals_bounds() {
        let mut source = SyntheticSource::with_seed(17);
        for _ in 0..1_000 {
            let row = source.fundamentals("NVDA");
            assert_eq!(row.symbol, "NVDA");
            assert!((10.0..50.0).contains(&row.pe_ratio));
            assert!((100.0..2100.0).contains(&row.market_cap));
            assert!(row.revenue_growth.abs() <= 25.0);
            assert!((5.0..35.0).contains(&row.profit_margin));
            assert!((0.0..2.0).contains(&row.debt_to_equity));
            assert!((0.5..2.5).contains(&row.beta));
            assert!((1.0..11.0).contains(&row.eps));
        }
    }

    #[test]
    fn test_seeded_sources_are_reproducible() {
        let entry = WatchlistEntry::synthesize("META");
        let a = SyntheticSource::with_seed(99).quote(&entry);
        let b = SyntheticSource::with_seed(99).quote(&entry);
        assert_eq!(a, b);
    }
}
