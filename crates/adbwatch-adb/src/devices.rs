//! Device listing via `adb devices -l`.

use crate::error::AdbError;
use crate::executor::AdbCommandRunner;

/// Connection state column of `adb devices` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceState {
    Device,
    Offline,
    Unauthorized,
    Other(String),
}

impl DeviceState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Device => "device",
            Self::Offline => "offline",
            Self::Unauthorized => "unauthorized",
            Self::Other(s) => s,
        }
    }

    /// Only fully-connected devices accept shell commands.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Device)
    }
}

impl From<&str> for DeviceState {
    fn from(s: &str) -> Self {
        match s {
            "device" => Self::Device,
            "offline" => Self::Offline,
            "unauthorized" => Self::Unauthorized,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of `adb devices -l`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub serial: String,
    pub state: DeviceState,
    /// `model:` property when the device reports one.
    pub model: Option<String>,
}

impl DeviceInfo {
    /// Human-facing name: the model when known, the serial otherwise.
    pub fn display_name(&self) -> &str {
        self.model.as_deref().unwrap_or(&self.serial)
    }
}

/// Execute `adb devices -l` and parse the output.
pub fn list_devices(runner: &impl AdbCommandRunner) -> Result<Vec<DeviceInfo>, AdbError> {
    let output = runner.run(&["devices", "-l"])?;
    Ok(parse_devices_output(&output))
}

/// Parse the raw output of `adb devices -l`. The banner line, daemon
/// startup notices and malformed rows are skipped, never errors.
pub fn parse_devices_output(output: &str) -> Vec<DeviceInfo> {
    let mut devices = Vec::new();
    for line in output.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('*')
            || trimmed.starts_with("List of devices")
        {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        let Some(serial) = tokens.next() else { continue };
        let Some(state) = tokens.next() else { continue };
        let model = tokens
            .find_map(|t| t.strip_prefix("model:"))
            .map(str::to_string);
        devices.push(DeviceInfo {
            serial: serial.to_string(),
            state: DeviceState::from(state),
            model,
        });
    }
    devices
}

// ─── Tests ──────────────────────────────────────────────────────────
