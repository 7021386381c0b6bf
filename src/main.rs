//! lapwatch - a terminal stopwatch with lap splits.
//!
//! Tracks elapsed time, records laps and remembers a light/dark theme
//! preference between runs.
//!
//! QUICK START:
//!   lapwatch                      # Start the interactive stopwatch
//!   lapwatch run -s table         # Print laps as a table on quit
//!   lapwatch format 3661050       # 01:01:01.05
//!   lapwatch theme toggle         # Flip the stored theme
//!   lapwatch paths                # Where config and preferences live

mod application;
mod cli;
mod domain;
mod infrastructure;

use clap::Parser;
use colored::Colorize;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{format_elapsed, format_laps, Session, SummaryFormat, ThemeManager};
use cli::{Cli, Commands};
use domain::{AppConfig, AppError, ThemePreference};
use infrastructure::{
    config_file_path, ensure_config_exists, load_config, FilePreferenceStore,
    MemoryPreferenceStore, SystemClock, TerminalSink,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let config = load_config()?;

    match cli.command.unwrap_or_default() {
        Commands::Run {
            tick_ms,
            summary,
            no_persist,
        } => {
            cmd_run(config, tick_ms, summary, no_persist)?;
        }
        Commands::Format { ms } => {
            cmd_format(&ms);
        }
        Commands::Theme { value } => {
            cmd_theme(&config, value.as_deref())?;
        }
        Commands::Paths => {
            cmd_paths(&config);
        }
        Commands::Init => {
            cmd_init()?;
        }
    }

    Ok(())
}

/// Interactive stopwatch command.
fn cmd_run(
    mut config: AppConfig,
    tick_ms: Option<u64>,
    summary: Option<String>,
    no_persist: bool,
) -> domain::Result<()> {
    if let Some(tick_ms) = tick_ms {
        config.timer.tick_ms = tick_ms;
    }
    if let Some(summary) = summary {
        config.display.summary = summary;
    }

    let period = config.tick_period()?;
    let format: SummaryFormat = config.display.summary.parse().map_err(AppError::config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::io("Failed to start runtime", e))?;

    let sink = TerminalSink::new(std::io::stdout());
    let input = BufReader::new(tokio::io::stdin());

    let summary = if no_persist {
        let session = Session::new(SystemClock, sink, MemoryPreferenceStore::default(), period);
        runtime.block_on(session.run(input))?
    } else {
        let store = FilePreferenceStore::open(&config.preferences_path())?;
        let session = Session::new(SystemClock, sink, store, period);
        runtime.block_on(session.run(input))?
    };

    println!();
    println!(
        "{} {}",
        "⏱ Total:".bold(),
        format_elapsed(summary.elapsed_ms).cyan()
    );
    println!(
        "{}",
        format_laps(&summary.laps, format).map_err(AppError::serialize)?
    );

    Ok(())
}

/// Print formatted values.
fn cmd_format(values: &[u64]) {
    for ms in values {
        println!("{}", format_elapsed(*ms));
    }
}

/// Show or change the stored theme.
fn cmd_theme(config: &AppConfig, value: Option<&str>) -> domain::Result<()> {
    let store = FilePreferenceStore::open(&config.preferences_path())?;
    let path = store.path().to_path_buf();
    let mut manager = ThemeManager::load(store);

    match value {
        None => {}
        Some("toggle") => {
            manager.toggle()?;
        }
        Some(value) => {
            let theme: ThemePreference = value.parse().map_err(AppError::config)?;
            manager.set(theme)?;
        }
    }

    let theme = manager.current();
    println!(
        "Theme: {} {}  {}",
        theme.icon(),
        theme.to_string().bold(),
        path.display().to_string().dimmed()
    );

    Ok(())
}

/// Show paths in use.
fn cmd_paths(config: &AppConfig) {
    println!("{}", "📁 Paths".bold());
    println!("  Data dir:    {}", config.data_dir().display());
    println!("  Config:      {}", config_file_path().display());
    println!("  Preferences: {}", config.preferences_path().display());
}

/// Write the default config file.
fn cmd_init() -> domain::Result<()> {
    let path = config_file_path();
    if ensure_config_exists(&path)? {
        println!("{} {}", "Created".green(), path.display());
    } else {
        println!("{} {}", "Already exists:".yellow(), path.display());
    }
    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // stderr keeps log lines out of the redrawn status line on stdout
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
