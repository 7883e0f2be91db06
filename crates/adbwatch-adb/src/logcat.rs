//! Logcat buffer dumps via `logcat -d`.

use crate::error::AdbError;
use crate::executor::AdbCommandRunner;

/// Fetch the device's entire current logcat buffer as raw text.
/// `-d` makes logcat dump and exit instead of streaming.
pub fn dump_log(runner: &impl AdbCommandRunner, serial: &str) -> Result<String, AdbError> {
    runner.run(&["-s", serial, "shell", "logcat -d"])
}

// ─── Tests ──────────────────────────────────────────────────────────
