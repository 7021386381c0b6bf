//! Terminal display sink.
//!
//! Keeps the elapsed time on a single line that is redrawn in place with a
//! carriage return; laps, notices and theme changes print above it.

use std::io::Write;

use colored::{ColoredString, Colorize};

use crate::application::DisplaySink;
use crate::domain::{Controls, LapRecord, ThemePreference};

/// Renders the stopwatch to any writer, usually stdout.
pub struct TerminalSink<W: Write> {
    out: W,
    theme: ThemePreference,
    controls: Option<Controls>,
    time: String,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            theme: ThemePreference::default(),
            controls: None,
            time: String::new(),
        }
    }

    /// Status line: theme icon, time and control labels.
    fn status_line(&self) -> String {
        let time = match self.theme {
            ThemePreference::Dark => self.time.bright_white().bold().on_black(),
            ThemePreference::Light => self.time.black().bold().on_bright_white(),
        };

        let controls = self.controls.map_or_else(String::new, |controls| {
            let lap = if controls.lap_enabled {
                self.accent("[l] Lap")
            } else {
                "[l] Lap".dimmed()
            };
            format!(
                "  {} {}  {}  {}",
                self.accent(&format!("[Enter] {}", controls.start_label)),
                lap,
                self.accent("[r] Reset"),
                self.accent("[t] Theme")
            )
        });

        format!("{} {time}{controls}", self.theme.icon())
    }

    fn accent(&self, text: &str) -> ColoredString {
        match self.theme {
            ThemePreference::Dark => text.cyan(),
            ThemePreference::Light => text.blue(),
        }
    }

    fn redraw(&mut self) {
        let line = format!("\r\x1b[2K{}", self.status_line());
        self.emit(&line);
    }

    /// Print a full line above the status line, then restore it.
    fn print_above(&mut self, text: &str) {
        let line = format!("\r\x1b[2K{text}\n");
        self.emit(&line);
        self.redraw();
    }

    fn emit(&mut self, text: &str) {
        let result = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    #[cfg(test)]
    pub const fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DisplaySink for TerminalSink<W> {
    fn elapsed(&mut self, text: &str) {
        if self.time != text {
            text.clone_into(&mut self.time);
            self.redraw();
        }
    }

    fn lap(&mut self, _lap: &LapRecord, text: &str) {
        let line = self.accent(text).to_string();
        self.print_above(&line);
    }

    fn laps_cleared(&mut self) {
        let line = "Laps cleared".dimmed().to_string();
        self.print_above(&line);
    }

    fn controls(&mut self, controls: Controls) {
        self.controls = Some(controls);
        self.redraw();
    }

    fn theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.redraw();
    }

    fn notice(&mut self, text: &str) {
        let line = text.italic().to_string();
        self.print_above(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StartLabel;

    fn output(sink: &TerminalSink<Vec<u8>>) -> String {
        String::from_utf8_lossy(sink.writer()).into_owned()
    }

    #[test]
    fn test_elapsed_redraws_only_on_change() {
        colored::control::set_override(false);
        let mut sink = TerminalSink::new(Vec::new());

        sink.elapsed("00:00:01.00");
        let first = output(&sink);
        assert!(first.contains("00:00:01.00"));

        sink.elapsed("00:00:01.00");
        assert_eq!(output(&sink), first);
    }

    #[test]
    fn test_lap_printed_above_status() {
        colored::control::set_override(false);
        let mut sink = TerminalSink::new(Vec::new());
        sink.controls(Controls {
            start_label: StartLabel::Pause,
            lap_enabled: true,
        });
        sink.elapsed("00:00:02.00");

        let lap = LapRecord {
            index: 1,
            elapsed_ms_at_lap: 2_000,
        };
        sink.lap(&lap, "Lap 1   00:00:02.00");

        let out = output(&sink);
        assert!(out.contains("Lap 1   00:00:02.00\n"));
        assert!(out.ends_with("[l] Lap  [r] Reset  [t] Theme"));
        assert!(out.contains("[Enter] Pause"));
    }

    #[test]
    fn test_theme_icon_follows_theme() {
        colored::control::set_override(false);
        let mut sink = TerminalSink::new(Vec::new());
        sink.theme(ThemePreference::Light);
        assert!(output(&sink).contains('☀'));
        sink.theme(ThemePreference::Dark);
        assert!(output(&sink).ends_with("☾ "));
    }
}
