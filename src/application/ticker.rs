//! Cancellable periodic sampling task.
//!
//! The task only emits ticks; the session loop turns each tick into a
//! sample on the controller, so state is never touched from the task.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// One sampling request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Handle to a running tick task. Dropping it aborts the task.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the tick task on the current runtime.
    ///
    /// Ticks that find the channel full are dropped, so a slow consumer
    /// sees one pending tick rather than a backlog.
    #[must_use]
    pub fn spawn(period: Duration, ticks: mpsc::Sender<Tick>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                match ticks.try_send(Tick) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });

        tracing::trace!(period = ?period, "Ticker started");

        Self { handle }
    }

    /// Stop the task. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::trace!("Ticker cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let ticker = Ticker::spawn(Duration::from_millis(10), tx);

        settle().await;
        assert_eq!(rx.try_recv(), Ok(Tick));

        tokio::time::advance(Duration::from_millis(10)).await;
        settle().await;
        assert_eq!(rx.try_recv(), Ok(Tick));

        ticker.cancel();
        settle().await;
        while rx.try_recv().is_ok() {}
        tokio::time::advance(Duration::from_millis(100)).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_channel_coalesces_ticks() {
        let (tx, mut rx) = mpsc::channel(1);
        let _ticker = Ticker::spawn(Duration::from_millis(10), tx);

        for _ in 0..5 {
            tokio::time::advance(Duration::from_millis(10)).await;
            settle().await;
        }

        assert_eq!(rx.try_recv(), Ok(Tick));
        assert!(rx.try_recv().is_err());
    }
}
