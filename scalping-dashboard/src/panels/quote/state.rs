//! Quote view model: reset on symbol change, drift on a timer

use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::shared::source::MarketDataSource;
use crate::shared::timer::{IntervalTimer, TimerEvent, TimerSender};
use crate::shared::types::{MarketStatus, Quote, WatchlistEntry};

/// Timer settings for a quote panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteTimings {
    pub drift_interval: Duration,
    pub market_status_interval: Duration,
    /// Skip drift ticks while the market is closed
    pub pause_drift_when_closed: bool,
}

impl Default for QuoteTimings {
    fn default() -> Self {
        Self {
            drift_interval: Duration::from_secs(3),
            market_status_interval: Duration::from_secs(60),
            pause_drift_when_closed: false,
        }
    }
}

/// Timers armed for one epoch; dropping them cancels both tasks
#[derive(Debug)]
struct ArmedTimers {
    _drift: IntervalTimer,
    _market_status: IntervalTimer,
}

/// Live quote for the selected symbol
///
/// Every symbol change bumps the epoch, redraws the quote and re-arms both
/// timers. Ticks carrying an older epoch are ignored, so a drift armed for
/// the previous symbol can never land on the new quote.
#[derive(Debug)]
pub struct QuotePanel {
    entry: WatchlistEntry,
    quote: Quote,
    market_status: MarketStatus,
    epoch: u64,
    timings: QuoteTimings,
    timer_tx: Option<TimerSender>,
    timers: Option<ArmedTimers>,
}

impl QuotePanel {
    pub fn new(
        entry: WatchlistEntry,
        source: &mut dyn MarketDataSource,
        timings: QuoteTimings,
        now: NaiveDateTime,
    ) -> Self {
        let quote = source.quote(&entry);
        Self {
            entry,
            quote,
            market_status: MarketStatus::at(now),
            epoch: 0,
            timings,
            timer_tx: None,
            timers: None,
        }
    }

    /// Start delivering timer events on `tx`
    ///
    /// Must be called from within a tokio runtime.
    pub fn attach_timers(&mut self, tx: TimerSender) {
        self.timer_tx = Some(tx);
        self.arm_timers();
    }

    /// Switch to a new symbol: redraw the quote and re-arm timers
    pub fn select(
        &mut self,
        entry: WatchlistEntry,
        source: &mut dyn MarketDataSource,
        now: NaiveDateTime,
    ) {
        // Old timers go first so no stale tick is produced after the reset
        if self.timers.take().is_some() {
            debug!("Disarmed timers for {}", self.entry.symbol);
        }
        self.epoch += 1;
        self.quote = source.quote(&entry);
        self.market_status = MarketStatus::at(now);
        info!(
            "Quote reset for {} at {:.2} (epoch {})",
            entry.symbol, self.quote.price, self.epoch
        );
        self.entry = entry;
        self.arm_timers();
    }

    fn arm_timers(&mut self) {
        let Some(tx) = &self.timer_tx else {
            return;
        };
        self.timers = Some(ArmedTimers {
            _drift: IntervalTimer::spawn(
                self.timings.drift_interval,
                TimerEvent::QuoteDrift { epoch: self.epoch },
                tx.clone(),
            ),
            _market_status: IntervalTimer::spawn(
                self.timings.market_status_interval,
                TimerEvent::MarketStatus { epoch: self.epoch },
                tx.clone(),
            ),
        });
    }

    /// Apply a timer event; returns true when state changed
    pub fn on_timer(
        &mut self,
        event: TimerEvent,
        source: &mut dyn MarketDataSource,
        now: NaiveDateTime,
    ) -> bool {
        if event.epoch() != self.epoch {
            debug!("Ignoring stale {:?} (current epoch {})", event, self.epoch);
            return false;
        }

        match event {
            TimerEvent::QuoteDrift { .. } => {
                if self.timings.pause_drift_when_closed && !self.market_status.is_open() {
                    return false;
                }
                source.drift(&mut self.quote);
                true
            }
            TimerEvent::MarketStatus { .. } => {
                let status = MarketStatus::at(now);
                if status != self.market_status {
                    info!("{}", status.as_str());
                }
                let changed = status != self.market_status;
                self.market_status = status;
                changed
            }
        }
    }

    pub fn entry(&self) -> &WatchlistEntry {
        &self.entry
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn market_status(&self) -> MarketStatus {
        self.market_status
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::source::SyntheticSource;
    use crate::shared::timer::timer_channel;
    use chrono::NaiveDate;

    fn monday(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn saturday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 13)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    const DRIFT: TimerEvent = TimerEvent::QuoteDrift { epoch: 0 };
    const STATUS: TimerEvent = TimerEvent::MarketStatus { epoch: 0 };

    fn panel(
        source: &mut SyntheticSource,
        timings: QuoteTimings,
        now: NaiveDateTime,
    ) -> QuotePanel {
        QuotePanel::new(WatchlistEntry::synthesize("AAPL"), source, timings, now)
    }

    #[test]
    fn test_reset_draws_category_conditioned_price() {
        let mut source = SyntheticSource::with_seed(1);
        let mut quote_panel = panel(&mut source, QuoteTimings::default(), monday(10));
        assert!((100.0..300.0).contains(&quote_panel.quote().price));

        quote_panel.select(WatchlistEntry::synthesize("^GSPC"), &mut source, monday(10));
        assert!((1000.0..6000.0).contains(&quote_panel.quote().price));
        assert_eq!(quote_panel.entry().symbol, "^GSPC");
        assert_eq!(quote_panel.epoch(), 1);
    }

    #[test]
    fn test_drift_applies_for_current_epoch() {
        let mut source = SyntheticSource::with_seed(2);
        let mut quote_panel = panel(&mut source, QuoteTimings::default(), monday(10));
        let before = quote_panel.quote().clone();

        let applied = quote_panel.on_timer(DRIFT, &mut source, monday(10));
        assert!(applied);
        assert_ne!(quote_panel.quote().price, before.price);
        assert_eq!(quote_panel.quote().pe_ratio, before.pe_ratio);
    }

    #[test]
    fn test_stale_drift_is_ignored_after_symbol_change() {
        let mut source = SyntheticSource::with_seed(3);
        let mut quote_panel = panel(&mut source, QuoteTimings::default(), monday(10));
        quote_panel.select(WatchlistEntry::synthesize("MSFT"), &mut source, monday(10));
        let reset = quote_panel.quote().clone();

        let applied = quote_panel.on_timer(DRIFT, &mut source, monday(10));
        assert!(!applied);
        assert_eq!(quote_panel.quote(), &reset);
    }

    #[test]
    fn test_drift_continues_while_closed_by_default() {
        let mut source = SyntheticSource::with_seed(4);
        let mut quote_panel = panel(&mut source, QuoteTimings::default(), saturday());
        assert_eq!(quote_panel.market_status(), MarketStatus::Closed);
        assert!(quote_panel.on_timer(DRIFT, &mut source, saturday()));
    }

    #[test]
    fn test_drift_paused_while_closed_when_configured() {
        let timings = QuoteTimings {
            pause_drift_when_closed: true,
            ..QuoteTimings::default()
        };
        let mut source = SyntheticSource::with_seed(5);
        let mut quote_panel = panel(&mut source, timings, saturday());
        let before = quote_panel.quote().clone();
        assert!(!quote_panel.on_timer(DRIFT, &mut source, saturday()));
        assert_eq!(quote_panel.quote(), &before);
    }

    #[test]
    fn test_market_status_recheck() {
        let mut source = SyntheticSource::with_seed(6);
        let mut quote_panel = panel(&mut source, QuoteTimings::default(), monday(8));
        assert_eq!(quote_panel.market_status(), MarketStatus::Closed);

        assert!(quote_panel.on_timer(STATUS, &mut source, monday(9)));
        assert_eq!(quote_panel.market_status(), MarketStatus::Open);
        assert!(!quote_panel.on_timer(STATUS, &mut source, monday(10)));
    }

    #[test]
    fn test_no_timers_without_channel() {
        let mut source = SyntheticSource::with_seed(7);
        let mut quote_panel = panel(&mut source, QuoteTimings::default(), monday(10));
        quote_panel.select(WatchlistEntry::synthesize("TSLA"), &mut source, monday(10));
        assert!(quote_panel.timers.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_on_symbol_change_delivers_only_new_epoch() {
        let timings = QuoteTimings {
            drift_interval: Duration::from_secs(3),
            market_status_interval: Duration::from_secs(60),
            pause_drift_when_closed: false,
        };
        let mut source = SyntheticSource::with_seed(8);
        let mut quote_panel = panel(&mut source, timings, monday(10));
        let (tx, mut rx) = timer_channel();
        quote_panel.attach_timers(tx);
        assert!(quote_panel.timers.is_some());

        tokio::time::sleep(Duration::from_secs(1)).await;
        quote_panel.select(WatchlistEntry::synthesize("MSFT"), &mut source, monday(10));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, TimerEvent::QuoteDrift { epoch: 1 });
        assert!(quote_panel.on_timer(event, &mut source, monday(10)));

        // Dropping the panel drops its sender and both timer tasks
        drop(quote_panel);
        assert_eq!(rx.recv().await, None);
    }
}
