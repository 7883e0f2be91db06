//! adbwatch-adb: adb subprocess IO boundary.
//! Provides command execution, server lifecycle, device listing, process
//! table parsing, and logcat dumps. No watch logic lives here.

pub mod devices;
pub mod error;
pub mod executor;
pub mod logcat;
pub mod process;
pub mod server;

pub use devices::{DeviceInfo, DeviceState, list_devices, parse_devices_output};
pub use error::AdbError;
pub use executor::{AdbCommandRunner, AdbExecutor};
pub use logcat::dump_log;
pub use process::{ProcessRecord, WatchTarget, find_target, is_alive, list_processes, parse_process_table};
pub use server::{ServerStatus, ensure_server};
