/// Recurring timers feeding the render loop
///
/// Each timer is a tokio task that sends a [`TimerEvent`] every period. The
/// owning [`IntervalTimer`] aborts the task when dropped. Ticks already
/// queued before the drop are filtered out by their epoch.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Tick delivered to the dashboard
///
/// `epoch` identifies the arming that produced the tick; consumers drop
/// ticks whose epoch is not current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    QuoteDrift { epoch: u64 },
    MarketStatus { epoch: u64 },
}

impl TimerEvent {
    pub fn epoch(&self) -> u64 {
        match self {
            TimerEvent::QuoteDrift { epoch } | TimerEvent::MarketStatus { epoch } => *epoch,
        }
    }
}

pub type TimerSender = mpsc::UnboundedSender<TimerEvent>;
pub type TimerReceiver = mpsc::UnboundedReceiver<TimerEvent>;

/// Create the channel timers report on
pub fn timer_channel() -> (TimerSender, TimerReceiver) {
    mpsc::unbounded_channel()
}

/// Handle to a spawned interval task; aborts the task on drop
#[derive(Debug)]
pub struct IntervalTimer {
    handle: JoinHandle<()>,
    event: TimerEvent,
}

impl IntervalTimer {
    /// Spawn a task sending `event` every `period`, first tick after one period
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration, event: TimerEvent, tx: TimerSender) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(event).is_err() {
                    debug!("Timer receiver dropped, stopping {:?}", event);
                    break;
                }
            }
        });

        debug!("Armed {:?} every {:?}", event, period);
        Self { handle, event }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.handle.abort();
        debug!("Cancelled {:?}", self.event);
    }
}
