//! Input line to command mapping.

/// Help shown for `h`.
pub const HELP: &str = "Enter: start/pause  l: lap  r: reset  t: theme  q: quit  h: help";

/// A user action on one of the stopwatch controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start/pause control.
    Toggle,
    Lap,
    Reset,
    /// Theme control.
    Theme,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse one line of input. Matching is case-insensitive; an empty line
    /// toggles.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let word = line.trim().to_lowercase();
        match word.as_str() {
            "" | "s" | "space" | "start" | "pause" | "resume" => Self::Toggle,
            "l" | "lap" => Self::Lap,
            "r" | "reset" => Self::Reset,
            "t" | "theme" => Self::Theme,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Command::Toggle);
        assert_eq!(Command::parse("  \n"), Command::Toggle);
        assert_eq!(Command::parse("Pause"), Command::Toggle);
        assert_eq!(Command::parse("l"), Command::Lap);
        assert_eq!(Command::parse("RESET"), Command::Reset);
        assert_eq!(Command::parse("t"), Command::Theme);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse(" zz "), Command::Unknown("zz".to_string()));
    }
}
