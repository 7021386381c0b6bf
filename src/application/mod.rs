//! Application layer - use cases and orchestration.
//!
//! This layer contains the timer controller, theme handling and the
//! interactive session that binds user commands to them.

pub mod commands;
pub mod controller;
pub mod display;
pub mod formatter;
pub mod session;
pub mod theme;
pub mod ticker;

pub use display::DisplaySink;
pub use formatter::{format_elapsed, format_laps, SummaryFormat};
pub use session::Session;
pub use theme::ThemeManager;
