//! AdbCommandRunner trait and AdbExecutor (sync subprocess wrapper).

use crate::error::AdbError;

/// Trait for executing adb commands. Enables mock injection for testing.
pub trait AdbCommandRunner: Send + Sync {
    fn run(&self, args: &[&str]) -> Result<String, AdbError>;
}

impl<T: AdbCommandRunner + ?Sized> AdbCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<String, AdbError> {
        (**self).run(args)
    }
}

/// Real adb executor using `std::process::Command`.
pub struct AdbExecutor {
    adb_bin: String,
}

impl AdbExecutor {
    pub fn new(adb_bin: impl Into<String>) -> Self {
        Self {
            adb_bin: adb_bin.into(),
        }
    }
}

impl Default for AdbExecutor {
    fn default() -> Self {
        Self::new("adb")
    }
}

impl AdbCommandRunner for AdbExecutor {
    fn run(&self, args: &[&str]) -> Result<String, AdbError> {
        let mut cmd = std::process::Command::new(&self.adb_bin);
        cmd.args(args);
        let output = cmd.output().map_err(AdbError::Io)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AdbError::CommandFailed(format!(
                "exit code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
