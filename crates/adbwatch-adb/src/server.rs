//! adb server lifecycle: probe the server's TCP port, start it if absent.

use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::Duration;

use crate::error::AdbError;
use crate::executor::AdbCommandRunner;

const DEFAULT_SERVER_PORT: u16 = 5037;

const PROBE_TIMEOUT: Duration = Duration::from_millis(500);

/// Outcome of the startup server check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    AlreadyRunning,
    Started,
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "ADB daemon already running."),
            Self::Started => write!(f, "ADB daemon has been started."),
        }
    }
}

/// Port the adb server listens on: `ANDROID_ADB_SERVER_PORT` when set to
/// a valid port, 5037 otherwise.
pub fn server_port() -> u16 {
    parse_port(std::env::var("ANDROID_ADB_SERVER_PORT").ok().as_deref())
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_SERVER_PORT)
}

fn probe(port: u16) -> bool {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).is_ok()
}

/// Make sure an adb server is listening, starting one if needed.
pub fn ensure_server(runner: &impl AdbCommandRunner) -> Result<ServerStatus, AdbError> {
    ensure_with_probe(runner, probe(server_port()))
}

fn ensure_with_probe(
    runner: &impl AdbCommandRunner,
    server_running: bool,
) -> Result<ServerStatus, AdbError> {
    if server_running {
        return Ok(ServerStatus::AlreadyRunning);
    }
    runner.run(&["start-server"])?;
    Ok(ServerStatus::Started)
}

// ─── Tests ──────────────────────────────────────────────────────────
