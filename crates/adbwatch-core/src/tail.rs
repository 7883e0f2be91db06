//! Incremental log tailing over a full-buffer redump.
//!
//! Each tick re-fetches the entire logcat buffer, so the tailer's single
//! timestamp watermark is the only thing separating already-seen lines
//! from new ones. A line at or before the watermark is never reported
//! twice; the watermark advances on every newer timestamped line whether
//! or not it matched the keyword.

use chrono::NaiveDateTime;

use crate::timestamp::extract_timestamp;

// ─── Keyword hit ────────────────────────────────────────────────────

/// One keyword match surfaced by a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordHit {
    pub timestamp: NaiveDateTime,
    pub line: String,
}

// ─── Tailer ─────────────────────────────────────────────────────────

/// Cursor-holding tailer for one watch session.
#[derive(Debug, Clone)]
pub struct LogTailer {
    /// Watermark: newest timestamp observed so far. Monotonically
    /// non-decreasing for the life of the tailer.
    last_seen: NaiveDateTime,
    /// Year applied to year-less logcat timestamps, captured once at
    /// session start.
    year: i32,
    /// Case-sensitive substring to report. `None` tails without reporting.
    keyword: Option<String>,
}

impl LogTailer {
    pub fn new(year: i32, keyword: Option<String>) -> Self {
        Self {
            last_seen: NaiveDateTime::MIN,
            year,
            keyword,
        }
    }

    /// Newest timestamp observed across all scans so far.
    pub fn last_seen(&self) -> NaiveDateTime {
        self.last_seen
    }

    /// Scan one full buffer dump, returning keyword hits among lines
    /// strictly newer than the watermark.
    ///
    /// Lines without a parseable timestamp are skipped entirely: they
    /// neither advance the watermark nor report, even on keyword match.
    pub fn scan(&mut self, buffer: &str) -> Vec<KeywordHit> {
        let mut hits = Vec::new();
        for line in buffer.lines() {
            let Some(ts) = extract_timestamp(line, self.year) else {
                continue;
            };
            if ts <= self.last_seen {
                continue;
            }
            if let Some(keyword) = &self.keyword
                && line.contains(keyword.as_str())
            {
                hits.push(KeywordHit {
                    timestamp: ts,
                    line: line.to_string(),
                });
            }
            self.last_seen = ts;
        }
        hits
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
