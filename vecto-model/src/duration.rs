//! Runtime formatting for catalog durations

use crate::error::{ModelError, Result};

/// Parse a duration expressed as a string of whole seconds.
pub fn parse_seconds(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ModelError::InvalidDuration(raw.to_string()))
}

/// Format a seconds string as `"{h}h {m}m"` or `"{m}m"`.
///
/// Unparsable input formats as `"0m"`; seconds below a full minute are
/// dropped.
pub fn format_duration(raw_seconds: &str) -> String {
    let Ok(seconds) = parse_seconds(raw_seconds) else {
        return String::from("0m");
    };
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_duration("6000"), "1h 40m");
        assert_eq!(format_duration("3600"), "1h 0m");
    }

    #[test]
    fn formats_minutes_only() {
        assert_eq!(format_duration("1980"), "33m");
        assert_eq!(format_duration("59"), "0m");
    }

    #[test]
    fn invalid_input_is_zero_minutes() {
        assert_eq!(format_duration(""), "0m");
        assert_eq!(format_duration("abc"), "0m");
        assert_eq!(format_duration("-5"), "0m");
    }
}
