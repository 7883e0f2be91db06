//! The watch loop: poll the process table until the target exits,
//! tailing logcat for keyword hits on every live tick.

use std::time::Duration;

use adbwatch_adb::{AdbCommandRunner, AdbError, WatchTarget, dump_log, is_alive, list_processes};
use adbwatch_core::{Clock, KeywordHit, LogTailer};

/// Poll until the target's pid disappears from the process table.
///
/// Each live tick fetches the full logcat buffer, scans it for keyword
/// hits past the tailer's watermark, surfaces them through `on_hit`,
/// then sleeps one poll interval. The tick that finds the target gone
/// returns immediately without sleeping.
pub fn run_watch(
    runner: &impl AdbCommandRunner,
    clock: &impl Clock,
    serial: &str,
    target: &WatchTarget,
    tailer: &mut LogTailer,
    poll_interval: Duration,
    mut on_hit: impl FnMut(&KeywordHit),
) -> Result<(), AdbError> {
    tracing::info!(pid = target.pid, name = %target.name, "watch started");
    loop {
        let records = list_processes(runner, serial)?;
        if !is_alive(&records, target) {
            tracing::info!(pid = target.pid, name = %target.name, "target exited");
            return Ok(());
        }
        let buffer = dump_log(runner, serial)?;
        let hits = tailer.scan(&buffer);
        for hit in &hits {
            on_hit(hit);
        }
        tracing::debug!(
            hits = hits.len(),
            last_seen = %tailer.last_seen(),
            "tick complete"
        );
        clock.sleep(poll_interval);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
