//! Stopwatch state machine.
//!
//! Pure timing logic with no clock or scheduling of its own: every
//! operation that needs the current time takes it as `now_ms`.

use super::models::{Controls, LapRecord, StartLabel};

/// Elapsed-time state plus recorded laps.
///
/// Two states, `Stopped` (initial) and `Running`. While running,
/// `elapsed_ms` never decreases; while stopped it is frozen.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    running: bool,
    /// Reference epoch such that `elapsed = now - anchor` while running.
    anchor_ms: i64,
    elapsed_ms: u64,
    /// Oldest first; reversed for display.
    laps: Vec<LapRecord>,
    /// Set by the first start after a reset, drives the "Resume" label.
    has_run: bool,
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time as of the last start, stop or sample.
    #[must_use]
    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Starts the stopwatch, continuing from the frozen elapsed time.
    ///
    /// Returns `false` if it was already running.
    pub fn start(&mut self, now_ms: i64) -> bool {
        if self.running {
            return false;
        }
        self.anchor_ms = now_ms.saturating_sub(to_i64(self.elapsed_ms));
        self.running = true;
        self.has_run = true;
        true
    }

    /// Stops the stopwatch, freezing elapsed time at `now_ms`.
    ///
    /// Returns `false` if it was already stopped.
    pub fn stop(&mut self, now_ms: i64) -> bool {
        if !self.running {
            return false;
        }
        self.sample(now_ms);
        self.running = false;
        true
    }

    /// Stops if running and clears elapsed time and laps.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recomputes elapsed time from the anchor.
    ///
    /// Does nothing while stopped. A clock that steps backwards leaves the
    /// elapsed time where it was instead of decreasing it.
    pub fn sample(&mut self, now_ms: i64) -> u64 {
        if self.running {
            let measured = u64::try_from(now_ms.saturating_sub(self.anchor_ms)).unwrap_or(0);
            self.elapsed_ms = self.elapsed_ms.max(measured);
        }
        self.elapsed_ms
    }

    /// Records a lap at the current elapsed time.
    ///
    /// Returns `None` (and records nothing) while stopped.
    pub fn lap(&mut self, now_ms: i64) -> Option<LapRecord> {
        if !self.running {
            return None;
        }
        let elapsed_ms_at_lap = self.sample(now_ms);
        let index = self.laps.last().map_or(1, |last| last.index + 1);
        let record = LapRecord {
            index,
            elapsed_ms_at_lap,
        };
        self.laps.push(record);
        Some(record)
    }

    /// Laps ordered most-recent-first.
    pub fn laps(&self) -> impl Iterator<Item = &LapRecord> {
        self.laps.iter().rev()
    }

    #[must_use]
    pub const fn controls(&self) -> Controls {
        let start_label = if self.running {
            StartLabel::Pause
        } else if self.has_run {
            StartLabel::Resume
        } else {
            StartLabel::Start
        };
        Controls {
            start_label,
            lap_enabled: self.running,
        }
    }
}

fn to_i64(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_resume() {
        let mut sw = Stopwatch::new();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_ms(), 0);

        assert!(sw.start(1_000));
        assert_eq!(sw.sample(1_500), 500);
        assert!(sw.stop(2_000));
        assert_eq!(sw.elapsed_ms(), 1_000);

        // Frozen while stopped
        assert_eq!(sw.sample(9_000), 1_000);

        assert!(sw.start(10_000));
        assert_eq!(sw.sample(10_250), 1_250);
    }

    #[test]
    fn test_double_start_and_stop_are_noops() {
        let mut sw = Stopwatch::new();
        assert!(!sw.stop(0));
        assert!(sw.start(100));
        assert!(!sw.start(500));
        assert_eq!(sw.sample(600), 500);
    }

    #[test]
    fn test_lap_while_stopped_is_noop() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.lap(100), None);
        assert_eq!(sw.laps().count(), 0);

        sw.start(0);
        sw.lap(100);
        sw.stop(200);
        assert_eq!(sw.lap(300), None);
        assert_eq!(sw.laps().count(), 1);
    }

    #[test]
    fn test_laps_increase_and_display_newest_first() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        let first = sw.lap(1_000).unwrap();
        let second = sw.lap(2_500).unwrap();
        let third = sw.lap(4_000).unwrap();
        assert_eq!((first.index, second.index, third.index), (1, 2, 3));

        let shown: Vec<_> = sw.laps().map(|l| (l.index, l.elapsed_ms_at_lap)).collect();
        assert_eq!(shown, vec![(3, 4_000), (2, 2_500), (1, 1_000)]);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut sw = Stopwatch::new();
        sw.start(0);
        sw.lap(100);
        sw.reset();
        assert!(!sw.is_running());
        assert_eq!(sw.elapsed_ms(), 0);
        assert_eq!(sw.laps().count(), 0);

        sw.start(1_000);
        sw.stop(3_000);
        sw.reset();
        assert_eq!(sw.elapsed_ms(), 0);

        // Lap numbering restarts after reset
        sw.start(5_000);
        assert_eq!(sw.lap(5_010).unwrap().index, 1);
    }

    #[test]
    fn test_backwards_clock_does_not_decrease_elapsed() {
        let mut sw = Stopwatch::new();
        sw.start(10_000);
        assert_eq!(sw.sample(12_000), 2_000);
        assert_eq!(sw.sample(11_000), 2_000);
        assert_eq!(sw.sample(5_000), 2_000);
        assert_eq!(sw.sample(12_500), 2_500);
    }

    #[test]
    fn test_controls_follow_state() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.controls().start_label, StartLabel::Start);
        assert!(!sw.controls().lap_enabled);

        sw.start(0);
        assert_eq!(sw.controls().start_label, StartLabel::Pause);
        assert!(sw.controls().lap_enabled);

        sw.stop(0);
        assert_eq!(sw.controls().start_label, StartLabel::Resume);
        assert!(!sw.controls().lap_enabled);

        sw.reset();
        assert_eq!(sw.controls().start_label, StartLabel::Start);
    }
}
