//! adbwatch: Android process watchdog and logcat tailer binary.
//! Attaches to a device, watches one process until it exits, reports
//! keyword hits from logcat while it runs, then writes a full log dump.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use adbwatch_adb::{
    AdbExecutor, dump_log, ensure_server, find_target, list_devices, list_processes,
};
use adbwatch_core::{Clock, LogTailer, SystemClock};

mod cli;
mod dump;
mod prompt;
mod watch;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("ADBWATCH_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let runner = AdbExecutor::new(&args.adb);
    let clock = SystemClock;

    println!("Connecting to the ADB server. Please wait..");
    let status = ensure_server(&runner).context("starting the adb server")?;
    println!("{status}");

    let devices = list_devices(&runner).context("listing devices")?;
    if devices.is_empty() {
        anyhow::bail!("no devices connected");
    }

    println!("Currently connected devices:");
    for line in prompt::format_device_lines(&devices) {
        println!("{line}");
    }

    let selection = prompt::read_line("Device to attach: ")?;
    let device = prompt::resolve_device_selection(&selection, &devices)?;
    let serial = device.serial.clone();
    tracing::info!(serial = %serial, "attached to device");

    println!("Running processes: ");
    let records = list_processes(&runner, &serial).context("listing processes")?;
    for record in &records {
        println!("\t{}", record.name);
    }

    let name = prompt::read_line("Process to monitor (name): ")?;
    let target = find_target(&records, &name);

    let keyword_input = prompt::read_line("Keyword to watch for (optional): ")?;
    let keyword = (!keyword_input.is_empty()).then_some(keyword_input);

    let mut tailer = LogTailer::new(clock.current_year(), keyword.clone());

    match &target {
        Some(target) => {
            println!("Watching {} with PID {}...", target.name, target.pid);
            watch::run_watch(
                &runner,
                &clock,
                &serial,
                target,
                &mut tailer,
                Duration::from_millis(args.poll_interval_ms),
                |hit| {
                    if let Some(keyword) = &keyword {
                        println!("Keyword {} found: {}", keyword, hit.line);
                    }
                },
            )
            .context("watching the target process")?;
            println!("{} (pid {}) exited. Dumping log.", target.name, target.pid);
        }
        None => {
            println!("No process named {name:?} is running. Dumping log.");
        }
    }

    let log = dump_log(&runner, &serial).context("dumping logcat")?;
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let path = dump::write_dump(&dir, target.as_ref(), &log).context("writing log dump")?;
    println!("Log dump written to {}", path.display());

    Ok(())
}
