//! Error types for the adb backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdbError {
    #[error("adb command failed: {0}")]
    CommandFailed(String),

    #[error("failed to parse process table line {line_num}: {detail}")]
    Parse { line_num: usize, detail: String },

    #[error("adb io error: {0}")]
    Io(#[from] std::io::Error),
}
