//! Timer controller.
//!
//! Owns the stopwatch, its sampling task and the display sink. All
//! operations are total: starting twice, stopping while stopped or taking a
//! lap while stopped are no-ops.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::domain::{LapRecord, Stopwatch};
use crate::infrastructure::Clock;

use super::display::DisplaySink;
use super::formatter::{format_elapsed, format_lap_line};
use super::ticker::{Tick, Ticker};

/// One controller per session.
pub struct TimerController<C, S> {
    stopwatch: Stopwatch,
    clock: C,
    sink: S,
    period: Duration,
    ticks: mpsc::Sender<Tick>,
    /// Present exactly while running.
    ticker: Option<Ticker>,
}

impl<C: Clock, S: DisplaySink> TimerController<C, S> {
    /// Create a stopped controller. Ticks are delivered on `ticks` while running.
    pub fn new(clock: C, sink: S, period: Duration, ticks: mpsc::Sender<Tick>) -> Self {
        Self {
            stopwatch: Stopwatch::new(),
            clock,
            sink,
            period,
            ticks,
            ticker: None,
        }
    }

    /// Start, continuing from the current elapsed time. Must be called
    /// within a tokio runtime.
    pub fn start(&mut self) {
        if !self.stopwatch.start(self.clock.now_ms()) {
            return;
        }
        self.ticker = Some(Ticker::spawn(self.period, self.ticks.clone()));
        tracing::debug!(elapsed_ms = self.stopwatch.elapsed_ms(), "Timer started");
        self.refresh();
    }

    /// Stop and freeze the elapsed time.
    pub fn stop(&mut self) {
        if !self.stopwatch.stop(self.clock.now_ms()) {
            return;
        }
        self.cancel_sampling();
        tracing::debug!(elapsed_ms = self.stopwatch.elapsed_ms(), "Timer stopped");
        self.refresh();
    }

    pub fn toggle(&mut self) {
        if self.stopwatch.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Stop, zero the elapsed time and discard all laps.
    pub fn reset(&mut self) {
        self.cancel_sampling();
        let had_laps = self.stopwatch.laps().next().is_some();
        self.stopwatch.reset();
        if had_laps {
            self.sink.laps_cleared();
        }
        tracing::debug!("Timer reset");
        self.refresh();
    }

    /// Record a lap; does nothing while stopped.
    pub fn lap(&mut self) -> Option<LapRecord> {
        let record = self.stopwatch.lap(self.clock.now_ms())?;
        self.sink.lap(&record, &format_lap_line(&record));
        tracing::debug!(
            index = record.index,
            elapsed_ms = record.elapsed_ms_at_lap,
            "Lap recorded"
        );
        self.publish_elapsed();
        Some(record)
    }

    /// Periodic callback. A tick delivered after sampling was cancelled is
    /// ignored because the stopwatch is no longer running.
    pub fn sample(&mut self) {
        if !self.stopwatch.is_running() {
            return;
        }
        self.stopwatch.sample(self.clock.now_ms());
        self.publish_elapsed();
    }

    /// Republish controls and elapsed time.
    pub fn refresh(&mut self) {
        self.sink.controls(self.stopwatch.controls());
        self.publish_elapsed();
    }

    #[cfg(test)]
    pub const fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.stopwatch.elapsed_ms()
    }

    /// Laps ordered most-recent-first.
    pub fn laps(&self) -> impl Iterator<Item = &LapRecord> {
        self.stopwatch.laps()
    }

    #[cfg(test)]
    pub const fn controls(&self) -> crate::domain::Controls {
        self.stopwatch.controls()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[cfg(test)]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    fn cancel_sampling(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    fn publish_elapsed(&mut self) {
        self.sink.elapsed(&format_elapsed(self.stopwatch.elapsed_ms()));
    }
}
