//! Human-readable byte and duration formatting.

use std::time::Duration;

const BYTE_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format a byte count with binary unit prefixes.
///
/// # Examples
///
/// ```
/// use medialink_core::human_bytes;
///
/// assert_eq!(human_bytes(0), "0 B");
/// assert_eq!(human_bytes(512), "512 B");
/// assert_eq!(human_bytes(1048576), "1.00 MiB");
/// ```
pub fn human_bytes(size: u64) -> String {
    if size < 1024 {
        return format!("{} {}", size, BYTE_UNITS[0]);
    }
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, BYTE_UNITS[unit])
}

/// Format a duration as `1d 2h 3m 4s`, omitting leading zero components.
///
/// # Examples
///
/// ```
/// use medialink_core::readable_duration;
/// use std::time::Duration;
///
/// assert_eq!(readable_duration(Duration::from_secs(0)), "0s");
/// assert_eq!(readable_duration(Duration::from_secs(90)), "1m 30s");
/// assert_eq!(readable_duration(Duration::from_secs(90061)), "1d 1h 1m 1s");
/// ```
pub fn readable_duration(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    if total == 0 {
        return "0s".to_string();
    }
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 {
        parts.push(format!("{}s", seconds));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_bytes_small() {
        assert_eq!(human_bytes(0), "0 B");
        assert_eq!(human_bytes(1023), "1023 B");
    }

    #[test]
    fn test_human_bytes_scaled() {
        assert_eq!(human_bytes(1024), "1.00 KiB");
        assert_eq!(human_bytes(1536), "1.50 KiB");
        assert_eq!(human_bytes(1073741824), "1.00 GiB");
    }

    #[test]
    fn test_human_bytes_caps_at_largest_unit() {
        // Beyond TiB stays in TiB rather than inventing a unit.
        assert!(human_bytes(u64::MAX).ends_with("TiB"));
    }

    #[test]
    fn test_readable_duration_components() {
        assert_eq!(readable_duration(Duration::from_secs(0)), "0s");
        assert_eq!(readable_duration(Duration::from_secs(59)), "59s");
        assert_eq!(readable_duration(Duration::from_secs(60)), "1m");
        assert_eq!(readable_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(readable_duration(Duration::from_secs(86400)), "1d");
        assert_eq!(readable_duration(Duration::from_secs(90061)), "1d 1h 1m 1s");
    }

    #[test]
    fn test_readable_duration_skips_zero_components() {
        assert_eq!(readable_duration(Duration::from_secs(3601)), "1h 1s");
    }
}
