//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use clap::{Parser, Subcommand};

/// lapwatch - a terminal stopwatch with lap splits.
///
/// Controls while running: Enter start/pause, l lap, r reset, t theme, q quit.
#[derive(Parser, Debug)]
#[command(name = "lapwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive stopwatch (default).
    Run {
        /// Sampling interval in milliseconds (1-10).
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Lap summary printed on quit: text, table or json.
        #[arg(short, long)]
        summary: Option<String>,

        /// Keep the theme preference in memory only.
        #[arg(long)]
        no_persist: bool,
    },

    /// Format millisecond values as HH:MM:SS.cc.
    Format {
        /// Milliseconds to format.
        #[arg(required = true)]
        ms: Vec<u64>,
    },

    /// Show or change the stored theme preference.
    Theme {
        /// light, dark or toggle. Shows the current theme if omitted.
        value: Option<String>,
    },

    /// Show the data, config and preference file paths.
    Paths,

    /// Write a default config file if none exists.
    Init,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Run {
            tick_ms: None,
            summary: None,
            no_persist: false,
        }
    }
}
