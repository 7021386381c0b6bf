//! Interactive stopwatch session.
//!
//! Binds input commands to the controller and theme manager and
//! multiplexes ticks with input on a single task. Ticks and commands are
//! handled one at a time, so the stopwatch needs no locking.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::domain::{AppError, LapRecord, Result};
use crate::infrastructure::{Clock, PreferenceStore};

use super::commands::{Command, HELP};
use super::controller::TimerController;
use super::display::DisplaySink;
use super::theme::ThemeManager;
use super::ticker::Tick;

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State left when a session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub elapsed_ms: u64,
    /// Most-recent-first.
    pub laps: Vec<LapRecord>,
}

pub struct Session<C, S, P> {
    controller: TimerController<C, S>,
    theme: ThemeManager<P>,
    ticks: mpsc::Receiver<Tick>,
}

impl<C: Clock, S: DisplaySink, P: PreferenceStore> Session<C, S, P> {
    /// Create a session. The theme preference is read here, once.
    pub fn new(clock: C, sink: S, store: P, period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);
        let controller = TimerController::new(clock, sink, period, tx);
        let theme = ThemeManager::load(store);
        Self {
            controller,
            theme,
            ticks,
        }
    }

    /// Run until a quit command or end of input.
    ///
    /// # Errors
    /// Returns error if reading input fails.
    pub async fn run<R>(mut self, input: R) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        self.controller.sink_mut().theme(self.theme.current());
        self.controller.refresh();
        tracing::info!(theme = %self.theme.current(), "Session started");

        loop {
            tokio::select! {
                Some(Tick) = self.ticks.recv() => self.controller.sample(),
                line = lines.next_line() => {
                    let Some(line) = line.map_err(|e| AppError::io("Failed to read input", e))? else {
                        break;
                    };
                    if self.dispatch(Command::parse(&line)) == Flow::Quit {
                        break;
                    }
                }
            }
        }

        Ok(self.finish())
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Flow {
        tracing::trace!(?command, "Command received");
        match command {
            Command::Toggle => self.controller.toggle(),
            Command::Lap => {
                if self.controller.lap().is_none() {
                    tracing::debug!("Lap ignored while stopped");
                }
            }
            Command::Reset => self.controller.reset(),
            Command::Theme => {
                let theme = match self.theme.toggle() {
                    Ok(theme) => theme,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to persist theme preference");
                        self.theme.current()
                    }
                };
                self.controller.sink_mut().theme(theme);
                self.controller.refresh();
            }
            Command::Help => self.controller.sink_mut().notice(HELP),
            Command::Quit => return Flow::Quit,
            Command::Unknown(input) => {
                self.controller
                    .sink_mut()
                    .notice(&format!("Unknown command: {input} (h for help)"));
            }
        }
        Flow::Continue
    }

    /// Stop the timer and collect what was recorded.
    fn finish(mut self) -> SessionSummary {
        self.controller.stop();
        let summary = SessionSummary {
            elapsed_ms: self.controller.elapsed_ms(),
            laps: self.controller.laps().copied().collect(),
        };
        tracing::info!(
            elapsed_ms = summary.elapsed_ms,
            laps = summary.laps.len(),
            "Session finished"
        );
        summary
    }

    #[cfg(test)]
    pub const fn controller(&self) -> &TimerController<C, S> {
        &self.controller
    }
}
