//! Process table listing and parsing.
//!
//! Device `ps` output is a header line followed by one row per process.
//! Column count varies by firmware, so the parser only trusts three
//! positions: user is the first token, pid the second, name the last.

use crate::error::AdbError;
use crate::executor::AdbCommandRunner;

/// `ps` replies shorter than this are treated as a truncated table and
/// re-fetched with `ps -A`.
const FULL_TABLE_MIN_LINES: usize = 10;

/// One row of the device process table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub user: String,
    pub pid: u32,
    pub name: String,
}

/// The process picked for watching. Never reassigned once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    pub pid: u32,
    pub name: String,
}

/// Fetch the process table for `serial`, falling back from `ps` to
/// `ps -A` when the first reply is too short to be a full table.
pub fn list_processes(
    runner: &impl AdbCommandRunner,
    serial: &str,
) -> Result<Vec<ProcessRecord>, AdbError> {
    let mut output = runner.run(&["-s", serial, "shell", "ps"])?;
    let lines = output.lines().count();
    if lines < FULL_TABLE_MIN_LINES {
        tracing::debug!(lines, "short ps reply, retrying with ps -A");
        output = runner.run(&["-s", serial, "shell", "ps -A"])?;
    }
    parse_process_table(&output)
}

/// Parse raw `ps` output. The first line is the column header and is
/// always discarded. Rows owned by `system` or `root` are filtered out
/// before any field parsing, so malformed fields there never error.
pub fn parse_process_table(output: &str) -> Result<Vec<ProcessRecord>, AdbError> {
    let mut records = Vec::new();
    for (idx, line) in output.lines().enumerate() {
        if idx == 0 {
            continue;
        }
        if let Some(record) = parse_record(line, idx + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

fn parse_record(line: &str, line_num: usize) -> Result<Option<ProcessRecord>, AdbError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&user) = tokens.first() else {
        return Ok(None);
    };
    if user == "system" || user == "root" {
        return Ok(None);
    }
    if tokens.len() < 3 {
        return Err(AdbError::Parse {
            line_num,
            detail: format!(
                "expected at least user, pid and name columns, got {} tokens",
                tokens.len()
            ),
        });
    }
    let pid = tokens[1].parse::<u32>().map_err(|e| AdbError::Parse {
        line_num,
        detail: format!("invalid pid column {:?}: {e}", tokens[1]),
    })?;
    Ok(Some(ProcessRecord {
        user: user.to_string(),
        pid,
        name: tokens[tokens.len() - 1].to_string(),
    }))
}

/// First record whose name equals `name`, as a watch target.
pub fn find_target(records: &[ProcessRecord], name: &str) -> Option<WatchTarget> {
    records.iter().find(|r| r.name == name).map(|r| WatchTarget {
        pid: r.pid,
        name: r.name.clone(),
    })
}

/// Liveness is keyed on pid alone: the target is alive iff some record
/// carries its pid, whatever that record's name.
pub fn is_alive(records: &[ProcessRecord], target: &WatchTarget) -> bool {
    records.iter().any(|r| r.pid == target.pid)
}

// ─── Tests ──────────────────────────────────────────────────────────
