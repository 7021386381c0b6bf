//! Domain layer - core stopwatch logic and types.
//!
//! This layer contains the timer state machine, domain models and error
//! types without any clock, scheduling or IO of its own.

pub mod config;
pub mod error;
pub mod models;
pub mod stopwatch;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use models::{Controls, LapRecord, StartLabel, ThemePreference};
pub use stopwatch::Stopwatch;
