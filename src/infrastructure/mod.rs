//! Infrastructure layer - external adapters (clock, files, terminal).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod clock;
pub mod config;
pub mod preferences;
pub mod terminal;

#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use config::{config_file_path, ensure_config_exists, load_config};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use terminal::TerminalSink;
