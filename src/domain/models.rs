//! Domain models for the stopwatch.
//!
//! Laps, the display theme and the derived state of the on-screen controls.

use serde::Serialize;

/// A recorded split. Created while running, never mutated, discarded on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapRecord {
    /// 1-based, increasing in creation order.
    pub index: u32,
    /// Total elapsed time when the lap was taken.
    pub elapsed_ms_at_lap: u64,
}

/// Light or dark display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// Interpret a stored preference value.
    ///
    /// Only `"light"` selects the light theme; anything else, including a
    /// missing value, falls back to dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// The value written to the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the theme control.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown theme: {s}. Use: light, dark")),
        }
    }
}

/// Label on the start/pause control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartLabel {
    Start,
    Pause,
    Resume,
}

impl std::fmt::Display for StartLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "Start"),
            Self::Pause => write!(f, "Pause"),
            Self::Resume => write!(f, "Resume"),
        }
    }
}

/// State of the on-screen controls, derived from the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start_label: StartLabel,
    /// The lap control is disabled while stopped.
    pub lap_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("LIGHT")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!("Light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("blue".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_lap_record_json_shape() {
        let lap = LapRecord {
            index: 2,
            elapsed_ms_at_lap: 1500,
        };
        let json = serde_json::to_string(&lap).unwrap();
        assert_eq!(json, r#"{"index":2,"elapsedMsAtLap":1500}"#);
    }
}
