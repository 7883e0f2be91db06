//! Clock port: the watch loop's only time dependency.
//! Injected so loop tests run without real delay.

use std::time::Duration;

use chrono::{Datelike, Local};

/// Time source for the watch loop: the session year for year-less
/// timestamps, and the inter-tick sleep.
pub trait Clock {
    fn current_year(&self) -> i32;
    fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation backed by the local timezone and
/// `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reports_plausible_year() {
        let year = SystemClock.current_year();
        assert!(year >= 2024, "unexpected year {year}");
    }

    #[test]
    fn zero_sleep_returns_immediately() {
        SystemClock.sleep(Duration::ZERO);
    }
}
