//! Cancellable one-shot timers for simulated work.
//!
//! Each scheduled timer is a spawned tokio task that sleeps and then sends
//! [`AppMessage::TimerFired`] back to the event loop. The scheduler keeps the
//! task handle until the message is taken, so everything still pending can be
//! aborted when a screen is torn down. A fired message whose id is no longer
//! live is dropped by [`Scheduler::take_fired`].

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::messages::AppMessage;
use crate::state::TimerEvent;

/// Identifies one scheduled timer.
pub type TimerId = u64;

#[derive(Debug)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<AppMessage>,
    live: HashMap<TimerId, (TimerEvent, JoinHandle<()>)>,
    next_id: TimerId,
    scale: f64,
}

impl Scheduler {
    /// Scheduler delivering fired timers on `tx`, with unit scale.
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            tx,
            live: HashMap::new(),
            next_id: 1,
            scale: 1.0,
        }
    }

    /// Multiply every delay by `scale`; non-positive or non-finite values are ignored.
    pub fn with_scale(mut self, scale: f64) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
        self
    }

    /// Current delay multiplier.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Delay actually slept for a nominal `after`.
    ///
    /// A product too large for a [`Duration`] falls back to `after` unscaled.
    pub fn scaled(&self, after: Duration) -> Duration {
        Duration::try_from_secs_f64(after.as_secs_f64() * self.scale).unwrap_or_else(|_| {
            tracing::warn!(scale = self.scale, ?after, "timer scale overflows, using nominal delay");
            after
        })
    }

    /// Arm `event` to fire after `after` (scaled). Must run inside a tokio runtime.
    pub fn schedule(&mut self, after: Duration, event: TimerEvent) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;

        let delay = self.scaled(after);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(AppMessage::TimerFired { id, event });
        });

        tracing::debug!(id, timer = event.name(), ?delay, "timer scheduled");
        self.live.insert(id, (event, handle));
        id
    }

    /// Claim a fired timer, returning its event if it is still live.
    pub fn take_fired(&mut self, id: TimerId) -> Option<TimerEvent> {
        match self.live.remove(&id) {
            Some((event, _)) => Some(event),
            None => {
                tracing::debug!(id, "dropping stale timer");
                None
            }
        }
    }

    /// Abort every pending timer.
    pub fn cancel_all(&mut self) {
        if self.live.is_empty() {
            return;
        }
        tracing::debug!(count = self.live.len(), "cancelling timers");
        for (_, (_, handle)) in self.live.drain() {
            handle.abort();
        }
    }

    /// Number of timers armed and not yet claimed.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// Whether `id` is armed and has not been claimed or cancelled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.live.contains_key(&id)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        for (_, (_, handle)) in self.live.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> (Scheduler, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Scheduler::new(tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (mut timers, mut rx) = scheduler();
        let id = timers.schedule(Duration::from_secs(1), TimerEvent::ContactReset);
        assert_eq!(timers.pending(), 1);

        let Some(AppMessage::TimerFired { id: fired, event }) = rx.recv().await else {
            panic!("channel closed");
        };
        assert_eq!(fired, id);
        assert_eq!(timers.take_fired(fired), Some(event));
        assert_eq!(event, TimerEvent::ContactReset);
        assert_eq!(timers.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_aborts_pending() {
        let (mut timers, mut rx) = scheduler();
        let first = timers.schedule(Duration::from_secs(1), TimerEvent::ContactReset);
        let second = timers.schedule(Duration::from_secs(2), TimerEvent::ReadingTick { run: 1 });
        assert!(timers.is_pending(first) && timers.is_pending(second));
        timers.cancel_all();
        assert_eq!(timers.pending(), 0);
        assert!(!timers.is_pending(first));
        assert!(!timers.is_pending(second));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_id_is_dropped() {
        let (mut timers, _rx) = scheduler();
        let id = timers.schedule(Duration::from_secs(1), TimerEvent::ContactReset);
        assert_eq!(timers.take_fired(id), Some(TimerEvent::ContactReset));
        assert!(!timers.is_pending(id));
        assert_eq!(timers.take_fired(id), None);
        assert_eq!(timers.take_fired(999), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scale_shortens_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = Scheduler::new(tx).with_scale(0.5);
        assert_eq!(timers.scaled(Duration::from_secs(4)), Duration::from_secs(2));

        let start = tokio::time::Instant::now();
        timers.schedule(Duration::from_secs(4), TimerEvent::ContactReset);
        rx.recv().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn test_huge_scale_falls_back_to_nominal_delay() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let timers = Scheduler::new(tx).with_scale(1e300);
        assert_eq!(timers.scaled(Duration::from_secs(3)), Duration::from_secs(3));
        assert_eq!(timers.scaled(Duration::ZERO), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_scale_still_schedules() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = Scheduler::new(tx).with_scale(1e300);
        let id = timers.schedule(Duration::from_secs(3), TimerEvent::ContactReset);
        assert!(timers.is_pending(id));

        let Some(AppMessage::TimerFired { id: fired, .. }) = rx.recv().await else {
            panic!("channel closed");
        };
        assert_eq!(fired, id);
    }

    #[test]
    fn test_bad_scale_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        assert_eq!(Scheduler::new(tx.clone()).with_scale(0.0).scale(), 1.0);
        assert_eq!(Scheduler::new(tx).with_scale(f64::NAN).scale(), 1.0);
    }
}
