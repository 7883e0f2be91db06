//! Operator prompts and selection parsing.

use std::io::{self, BufRead, Write};

use adbwatch_adb::DeviceInfo;

/// Print `label` without a trailing newline and read one trimmed line
/// from stdin.
pub fn read_line(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Numbered device lines for the attach prompt.
pub fn format_device_lines(devices: &[DeviceInfo]) -> Vec<String> {
    devices
        .iter()
        .enumerate()
        .map(|(idx, d)| format!("\t{idx}: {} ({})", d.display_name(), d.state))
        .collect()
}

/// Resolve the operator's numeric selection against the listed devices.
/// Only an in-range index of a ready device is accepted.
pub fn resolve_device_selection<'a>(
    input: &str,
    devices: &'a [DeviceInfo],
) -> anyhow::Result<&'a DeviceInfo> {
    let idx: usize = input
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("device selection {input:?} is not a number"))?;
    let device = devices
        .get(idx)
        .ok_or_else(|| anyhow::anyhow!("no device at index {idx}"))?;
    if !device.state.is_ready() {
        anyhow::bail!(
            "device {} is {}, not ready for shell commands",
            device.serial,
            device.state
        );
    }
    Ok(device)
}

// ─── Tests ──────────────────────────────────────────────────────────
