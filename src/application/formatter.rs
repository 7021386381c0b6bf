//! Output formatting for elapsed time and lap lists.
//!
//! Supports three lap summary formats: plain text, JSON, and table view.

use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use crate::domain::LapRecord;

/// Lap summary format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// One line per lap.
    #[default]
    Text,
    /// JSON format for programmatic use.
    Json,
    /// Boxed table listing.
    Table,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown format: {s}. Use: text, json, table")),
        }
    }
}

/// Formats milliseconds as `HH:MM:SS.cc`.
///
/// Centiseconds are truncated, not rounded. Hours keep growing past 99.
#[must_use]
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{h:02}:{m:02}:{s:02}.{cs:02}")
}

/// Formats a single lap as shown in the lap list.
#[must_use]
pub fn format_lap_line(lap: &LapRecord) -> String {
    format!("Lap {:<3} {}", lap.index, format_elapsed(lap.elapsed_ms_at_lap))
}

/// Formats laps (already ordered most-recent-first) in the requested format.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn format_laps<'a, I>(laps: I, format: SummaryFormat) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = &'a LapRecord>,
{
    let laps: Vec<&LapRecord> = laps.into_iter().collect();
    match format {
        SummaryFormat::Text => Ok(format_laps_text(&laps)),
        SummaryFormat::Json => format_laps_json(&laps),
        SummaryFormat::Table => Ok(format_laps_table(&laps)),
    }
}

fn format_laps_text(laps: &[&LapRecord]) -> String {
    if laps.is_empty() {
        return "No laps recorded".to_string();
    }
    laps.iter()
        .map(|lap| format_lap_line(lap))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LapView<'a> {
    #[serde(flatten)]
    record: &'a LapRecord,
    formatted: String,
}

fn format_laps_json(laps: &[&LapRecord]) -> Result<String, serde_json::Error> {
    let views: Vec<LapView<'_>> = laps
        .iter()
        .map(|&record| LapView {
            record,
            formatted: format_elapsed(record.elapsed_ms_at_lap),
        })
        .collect();
    serde_json::to_string_pretty(&views)
}

fn format_laps_table(laps: &[&LapRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Lap", "Elapsed", "Split"]);

    // Splits are measured against the previous (older) lap.
    for (pos, lap) in laps.iter().enumerate() {
        let previous = laps.get(pos + 1).map_or(0, |older| older.elapsed_ms_at_lap);
        let split = lap.elapsed_ms_at_lap.saturating_sub(previous);
        table.add_row(vec![
            lap.index.to_string(),
            format_elapsed(lap.elapsed_ms_at_lap),
            format_elapsed(split),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lap(index: u32, elapsed_ms_at_lap: u64) -> LapRecord {
        LapRecord {
            index,
            elapsed_ms_at_lap,
        }
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00.00");
        assert_eq!(format_elapsed(3_661_050), "01:01:01.05");
        assert_eq!(format_elapsed(12_340), "00:00:12.34");
        assert_eq!(format_elapsed(59_999), "00:00:59.99");
    }

    #[test]
    fn test_format_elapsed_truncates_centiseconds() {
        assert_eq!(format_elapsed(9), "00:00:00.00");
        assert_eq!(format_elapsed(1_999), "00:00:01.99");
    }

    #[test]
    fn test_format_elapsed_hours_grow_unbounded() {
        assert_eq!(format_elapsed(100 * 3_600_000), "100:00:00.00");
    }

    #[test]
    fn test_format_elapsed_is_monotonic() {
        let mut previous = format_elapsed(0);
        // Fixed-width below 100h, so string order matches numeric order.
        for ms in (0..7_300_000).step_by(7) {
            let current = format_elapsed(ms);
            assert!(current >= previous, "{current} < {previous} at {ms}");
            previous = current;
        }
    }

    #[test]
    fn test_format_laps_text() {
        let laps = [lap(2, 2_500), lap(1, 1_000)];
        let text = format_laps(&laps, SummaryFormat::Text).unwrap();
        assert_eq!(text, "Lap 2   00:00:02.50\nLap 1   00:00:01.00");
        assert_eq!(
            format_laps(std::iter::empty(), SummaryFormat::Text).unwrap(),
            "No laps recorded"
        );
    }

    #[test]
    fn test_format_laps_json() {
        let laps = [lap(1, 1_000)];
        let json = format_laps(&laps, SummaryFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["index"], 1);
        assert_eq!(value[0]["elapsedMsAtLap"], 1_000);
        assert_eq!(value[0]["formatted"], "00:00:01.00");
    }

    #[test]
    fn test_format_laps_table_splits() {
        let laps = [lap(2, 2_500), lap(1, 1_000)];
        let table = format_laps(&laps, SummaryFormat::Table).unwrap();
        assert!(table.contains("00:00:01.50"));
        assert!(table.contains("Split"));
    }

    #[test]
    fn test_summary_format_from_str() {
        assert_eq!("text".parse::<SummaryFormat>(), Ok(SummaryFormat::Text));
        assert_eq!("JSON".parse::<SummaryFormat>(), Ok(SummaryFormat::Json));
        assert_eq!("table".parse::<SummaryFormat>(), Ok(SummaryFormat::Table));
        assert!("csv".parse::<SummaryFormat>().is_err());
    }
}
