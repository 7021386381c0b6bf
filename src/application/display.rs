//! Display sink the controller publishes to.

use crate::domain::{Controls, LapRecord, ThemePreference};

/// Receives everything the stopwatch shows on screen.
pub trait DisplaySink {
    /// Formatted elapsed time; called on every tick and after state changes.
    fn elapsed(&mut self, text: &str);

    /// A new lap, to be prepended to the lap list.
    fn lap(&mut self, lap: &LapRecord, text: &str);

    /// The lap list was cleared by a reset.
    fn laps_cleared(&mut self);

    fn controls(&mut self, controls: Controls);

    fn theme(&mut self, theme: ThemePreference);

    /// Help text or feedback on unrecognized input.
    fn notice(&mut self, text: &str);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn elapsed(&mut self, text: &str) {
        (**self).elapsed(text);
    }

    fn lap(&mut self, lap: &LapRecord, text: &str) {
        (**self).lap(lap, text);
    }

    fn laps_cleared(&mut self) {
        (**self).laps_cleared();
    }

    fn controls(&mut self, controls: Controls) {
        (**self).controls(controls);
    }

    fn theme(&mut self, theme: ThemePreference) {
        (**self).theme(theme);
    }

    fn notice(&mut self, text: &str) {
        (**self).notice(text);
    }
}

/// Sink that keeps what it was sent, for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub elapsed: Vec<String>,
    /// Newest first, as displayed.
    pub laps: Vec<String>,
    /// Number of `laps_cleared` calls.
    pub cleared: usize,
    pub controls: Option<Controls>,
    pub theme: Option<ThemePreference>,
    pub notices: Vec<String>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn last_elapsed(&self) -> Option<&str> {
        self.elapsed.last().map(String::as_str)
    }
}

#[cfg(test)]
impl DisplaySink for RecordingSink {
    fn elapsed(&mut self, text: &str) {
        self.elapsed.push(text.to_string());
    }

    fn lap(&mut self, _lap: &LapRecord, text: &str) {
        self.laps.insert(0, text.to_string());
    }

    fn laps_cleared(&mut self) {
        self.laps.clear();
        self.cleared += 1;
    }

    fn controls(&mut self, controls: Controls) {
        self.controls = Some(controls);
    }

    fn theme(&mut self, theme: ThemePreference) {
        self.theme = Some(theme);
    }

    fn notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }
}
