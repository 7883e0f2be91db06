//! Logcat line timestamp extraction.
//!
//! Logcat's default output prefixes each entry with `MM-DD HH:MM:SS.mmm`
//! and carries no year, so callers supply one. Lines without a parseable
//! timestamp are non-events for tailing.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// Matches `MM-DD HH:MM:SS.mmm` anywhere in a line.
static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2})-(\d{2}) (\d{2}):(\d{2}):(\d{2})\.(\d{3})").unwrap()
});

/// Extract the timestamp from a single logcat line.
///
/// Returns `None` when the line carries no timestamp, or when the matched
/// digits do not form a valid calendar date/time (e.g. month 13, hour 25)
/// in the supplied year.
pub fn extract_timestamp(line: &str, year: i32) -> Option<NaiveDateTime> {
    let caps = TIMESTAMP_PATTERN.captures(line)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let hour: u32 = caps[3].parse().ok()?;
    let minute: u32 = caps[4].parse().ok()?;
    let second: u32 = caps[5].parse().ok()?;
    let milli: u32 = caps[6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, milli)?;
    Some(NaiveDateTime::new(date, time))
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.3f")
            .expect("valid test timestamp")
    }

    // ── 1. Standard logcat line parses ──────────────────────────────

    #[test]
    fn extracts_timestamp_from_logcat_line() {
        let line = "06-01 12:00:00.123 I/ActivityManager: Displayed com.example.app";
        assert_eq!(
            extract_timestamp(line, 2026),
            Some(ts("2026-06-01 12:00:00.123"))
        );
    }

    // ── 2. Timestamp mid-line still matches ─────────────────────────

    #[test]
    fn extracts_timestamp_not_at_line_start() {
        let line = "--------- beginning of main 06-01 08:15:30.001";
        assert_eq!(
            extract_timestamp(line, 2026),
            Some(ts("2026-06-01 08:15:30.001"))
        );
    }

    // ── 3. No timestamp yields None ─────────────────────────────────

    #[test]
    fn line_without_timestamp_is_none() {
        assert_eq!(extract_timestamp("no timestamp here", 2026), None);
        assert_eq!(extract_timestamp("", 2026), None);
    }

    // ── 4. Digit shapes that are not valid instants yield None ──────

    #[test]
    fn invalid_calendar_values_are_none() {
        // Month 13
        assert_eq!(extract_timestamp("13-01 10:00:00.000 x", 2026), None);
        // Day 40
        assert_eq!(extract_timestamp("06-40 10:00:00.000 x", 2026), None);
        // Hour 25
        assert_eq!(extract_timestamp("06-01 25:00:00.000 x", 2026), None);
        // Minute 99
        assert_eq!(extract_timestamp("06-01 10:99:00.000 x", 2026), None);
    }

    // ── 5. Validity depends on the supplied year ────────────────────

    #[test]
    fn leap_day_validity_follows_year() {
        let line = "02-29 00:00:00.000 I/Tag: leap";
        assert_eq!(
            extract_timestamp(line, 2024),
            Some(ts("2024-02-29 00:00:00.000"))
        );
        assert_eq!(extract_timestamp(line, 2023), None);
    }

    // ── 6. Partial shapes do not match ──────────────────────────────

    #[test]
    fn truncated_timestamp_is_none() {
        // Missing millisecond fraction
        assert_eq!(extract_timestamp("06-01 12:00:00 I/Tag: x", 2026), None);
        // Date only
        assert_eq!(extract_timestamp("06-01 I/Tag: x", 2026), None);
    }
}
