//! CLI definition using clap derive.

use clap::Parser;

#[derive(Parser)]
#[command(name = "adbwatch", about = "Android process watchdog and logcat tailer")]
pub struct Cli {
    /// Path to the adb binary
    #[arg(long, env = "ADBWATCH_ADB", default_value = "adb")]
    pub adb: String,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "1000")]
    pub poll_interval_ms: u64,
}
