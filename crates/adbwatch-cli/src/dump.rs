//! Final logcat dump written next to the working directory.

use std::path::{Path, PathBuf};

use adbwatch_adb::WatchTarget;

/// File name for the final dump: `logcat_dump_{name}_{pid}.txt` after a
/// watch, plain `logcat_dump.txt` when nothing was watched.
pub fn dump_filename(target: Option<&WatchTarget>) -> String {
    match target {
        Some(t) => format!("logcat_dump_{}_{}.txt", sanitize(&t.name), t.pid),
        None => "logcat_dump.txt".to_string(),
    }
}

/// Process names may carry path separators; the dump must stay inside
/// the target directory.
fn sanitize(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Write `contents` verbatim to the dump file under `dir`.
pub fn write_dump(
    dir: &Path,
    target: Option<&WatchTarget>,
    contents: &str,
) -> std::io::Result<PathBuf> {
    let path = dir.join(dump_filename(target));
    std::fs::write(&path, contents)?;
    Ok(path)
}

// ─── Tests ──────────────────────────────────────────────────────────
