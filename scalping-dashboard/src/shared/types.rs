/// Core data types for the dashboard
///
/// Every value here is transient: panels regenerate them from the data
/// source and nothing is persisted between runs.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;

/// Marker prefix used by index symbols (e.g. "^GSPC")
pub const INDEX_PREFIX: char = '^';

/// Instrument category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Index,
    Stock,
}

impl Category {
    /// Infer the category from the symbol naming convention
    pub fn infer(symbol: &str) -> Self {
        if symbol.starts_with(INDEX_PREFIX) {
            Category::Index
        } else {
            Category::Stock
        }
    }

    /// Convert to display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Index => "Index",
            Category::Stock => "Stock",
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Category::Index)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    /// Ticker as typed by the user, upper-cased (e.g. "AAPL", "^FTSE")
    pub symbol: String,
    /// Human readable label (e.g. "Apple", "FTSE 100")
    pub label: String,
    pub category: Category,
}

impl WatchlistEntry {
    pub fn new(symbol: impl Into<String>, label: impl Into<String>, category: Category) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
            category,
        }
    }

    /// Entry for a symbol outside the built-in catalog
    ///
    /// The label falls back to the symbol itself.
    pub fn synthesize(symbol: &str) -> Self {
        Self::new(symbol, symbol, Category::infer(symbol))
    }
}

/// Full quote for the selected symbol
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub day_high: f64,
    pub day_low: f64,
    pub market_cap: f64,
    pub pe_ratio: f64,
    pub avg_volume: u64,
}

impl Quote {
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}

/// Compact quote for the watchlist card grid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MiniQuote {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
}

/// Selectable history window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    #[default]
    OneDay,
    OneWeek,
    OneMonth,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::OneDay, TimeRange::OneWeek, TimeRange::OneMonth];

    /// Number of generated points for this range
    ///
    /// 1D is one point per trading minute (6.5h session).
    pub fn point_count(&self) -> usize {
        match self {
            TimeRange::OneDay => 390,
            TimeRange::OneWeek => 35,
            TimeRange::OneMonth => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::OneDay => "1D",
            TimeRange::OneWeek => "1W",
            TimeRange::OneMonth => "1M",
        }
    }

    /// Cycle to the next range (1D -> 1W -> 1M -> 1D)
    pub fn next(&self) -> Self {
        match self {
            TimeRange::OneDay => TimeRange::OneWeek,
            TimeRange::OneWeek => TimeRange::OneMonth,
            TimeRange::OneMonth => TimeRange::OneDay,
        }
    }

    /// Whether points are spaced by minutes rather than days
    pub fn is_intraday(&self) -> bool {
        matches!(self, TimeRange::OneDay)
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single point of the synthetic price history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    /// "HH:MM" for intraday ranges, "MM/DD/YYYY" otherwise
    pub time: String,
    pub price: f64,
    pub volume: u64,
    pub high: f64,
    pub low: f64,
}

/// Risk level attached to a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canned heuristic signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskSignal {
    pub category: &'static str,
    pub label: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    /// 0..=100
    pub confidence: u8,
    pub timeframe: &'static str,
}

/// Call or put side of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionSide {
    #[default]
    Call,
    Put,
}

impl OptionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "Call Options",
            OptionSide::Put => "Put Options",
        }
    }
}

/// One row of the options chain
#[derive(Debug, Clone, PartialEq)]
pub struct OptionContract {
    pub strike: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    pub volume: u64,
    pub open_interest: u64,
    /// Fraction, 0.28 == 28%
    pub implied_volatility: f64,
}

/// Display tier for implied volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IvTier {
    Low,
    Medium,
    High,
}

impl IvTier {
    pub fn from_iv(iv: f64) -> Self {
        if iv < 0.25 {
            IvTier::Low
        } else if iv < 0.35 {
            IvTier::Medium
        } else {
            IvTier::High
        }
    }
}

/// Synthetic fundamental ratios for one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct FundamentalRow {
    pub symbol: String,
    pub pe_ratio: f64,
    /// Billions of USD
    pub market_cap: f64,
    /// Percent, may be negative
    pub revenue_growth: f64,
    pub profit_margin: f64,
    pub debt_to_equity: f64,
    pub roe: f64,
    pub dividend_yield: f64,
    pub beta: f64,
    pub book_value: f64,
    pub eps: f64,
}

impl FundamentalRow {
    pub fn valuation(&self) -> Valuation {
        Valuation::from_pe(self.pe_ratio)
    }
}

/// P/E based valuation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Valuation {
    Undervalued,
    Fair,
    Overvalued,
}

impl Valuation {
    /// Bucket a P/E ratio: < 20 undervalued, < 30 fair, otherwise overvalued
    pub fn from_pe(pe_ratio: f64) -> Self {
        if pe_ratio < 20.0 {
            Valuation::Undervalued
        } else if pe_ratio < 30.0 {
            Valuation::Fair
        } else {
            Valuation::Overvalued
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Valuation::Undervalued => "Undervalued",
            Valuation::Fair => "Fair",
            Valuation::Overvalued => "Overvalued",
        }
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Regular session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarketStatus {
    Open,
    #[default]
    Closed,
}

impl MarketStatus {
    /// Simplified session check: weekdays between 09:00 and 16:00 local time
    ///
    /// Ignores holidays and exchange time zones.
    pub fn at(local: NaiveDateTime) -> Self {
        let weekday = !matches!(local.weekday(), Weekday::Sat | Weekday::Sun);
        let hours = (9..16).contains(&local.hour());
        if weekday && hours {
            MarketStatus::Open
        } else {
            MarketStatus::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MarketStatus::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Open => "Market Open",
            MarketStatus::Closed => "Market Closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_category_inference() {
        assert_eq!(Category::infer("^GSPC"), Category::Index);
        assert_eq!(Category::infer("AAPL"), Category::Stock);
        assert_eq!(Category::infer("BRK^B"), Category::Stock);
    }

    #[test]
    fn test_synthesized_entry_uses_symbol_as_label() {
        let entry = WatchlistEntry::synthesize("^XYZ");
        assert_eq!(entry.label, "^XYZ");
        assert!(entry.category.is_index());
    }

    #[test]
    fn test_point_counts() {
        assert_eq!(TimeRange::OneDay.point_count(), 390);
        assert_eq!(TimeRange::OneWeek.point_count(), 35);
        assert_eq!(TimeRange::OneMonth.point_count(), 30);
    }

    #[test]
    fn test_range_cycle() {
        let mut range = TimeRange::default();
        for expected in [TimeRange::OneWeek, TimeRange::OneMonth, TimeRange::OneDay] {
            range = range.next();
            assert_eq!(range, expected);
        }
    }

    #[test]
    fn test_valuation_buckets() {
        assert_eq!(Valuation::from_pe(0.0), Valuation::Undervalued);
        assert_eq!(Valuation::from_pe(19.999), Valuation::Undervalued);
        assert_eq!(Valuation::from_pe(20.0), Valuation::Fair);
        assert_eq!(Valuation::from_pe(29.999), Valuation::Fair);
        assert_eq!(Valuation::from_pe(30.0), Valuation::Overvalued);
        assert_eq!(Valuation::from_pe(1e9), Valuation::Overvalued);
    }

    #[test]
    fn test_valuation_is_monotonic() {
        let mut prev = Valuation::from_pe(0.0);
        let mut pe = 0.0;
        while pe < 60.0 {
            let current = Valuation::from_pe(pe);
            assert!(current >= prev, "bucket went backwards at P/E {pe}");
            prev = current;
            pe += 0.25;
        }
    }

    #[test]
    fn test_iv_tiers() {
        assert_eq!(IvTier::from_iv(0.24), IvTier::Low);
        assert_eq!(IvTier::from_iv(0.25), IvTier::Medium);
        assert_eq!(IvTier::from_iv(0.349), IvTier::Medium);
        assert_eq!(IvTier::from_iv(0.35), IvTier::High);
    }

    #[test]
    fn test_market_status_weekday_hours() {
        // 2024-01-15 is a Monday
        assert_eq!(MarketStatus::at(at(2024, 1, 15, 9, 0)), MarketStatus::Open);
        assert_eq!(MarketStatus::at(at(2024, 1, 15, 15, 59)), MarketStatus::Open);
        assert_eq!(MarketStatus::at(at(2024, 1, 15, 16, 0)), MarketStatus::Closed);
        assert_eq!(MarketStatus::at(at(2024, 1, 15, 8, 59)), MarketStatus::Closed);
    }

    #[test]
    fn test_market_status_weekend() {
        // 2024-01-13 is a Saturday, 2024-01-14 a Sunday
        assert_eq!(MarketStatus::at(at(2024, 1, 13, 11, 0)), MarketStatus::Closed);
        assert_eq!(MarketStatus::at(at(2024, 1, 14, 11, 0)), MarketStatus::Closed);
    }
}
