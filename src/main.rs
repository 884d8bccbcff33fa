//! rpimon - print a host telemetry snapshot as JSON.
//!
//! Usage:
//!   rpimon                      # full snapshot, compact JSON
//!   rpimon --pretty             # full snapshot, indented
//!   rpimon --section load-avg   # a single reading
//!   rpimon --proc-path /host/proc --sys-path /host/sys

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[cfg(not(target_os = "linux"))]
use rpimon::collector::{MockFs, MockRunner};
#[cfg(target_os = "linux")]
use rpimon::collector::{RealFs, RealRunner};
use rpimon::collector::{
    Collector, CommandRunner, CommandSpec, FileSystem, SourcePaths,
    config::{DEFAULT_PROC_PATH, DEFAULT_SYS_PATH},
};

/// Host telemetry snapshot for Raspberry Pi class devices.
#[derive(Parser)]
#[command(name = "rpimon", about = "Host telemetry snapshot as JSON", version)]
struct Args {
    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Print only one reading instead of the whole snapshot.
    #[arg(short, long, value_enum)]
    section: Option<Section>,

    /// Path to /proc filesystem.
    #[arg(long, default_value = DEFAULT_PROC_PATH)]
    proc_path: String,

    /// Path to /sys filesystem.
    #[arg(long, default_value = DEFAULT_SYS_PATH)]
    sys_path: String,

    /// GPU temperature command (whitespace-separated, no shell).
    #[arg(long, value_name = "COMMAND")]
    vcgencmd: Option<CommandSpec>,

    /// Disk usage command (whitespace-separated, no shell).
    #[arg(long, value_name = "COMMAND")]
    df: Option<CommandSpec>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is warn level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// A single snapshot field.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Section {
    Core,
    Uptime,
    Temperature,
    Stat,
    Memory,
    LoadAvg,
    Net,
    Disk,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let mut paths = SourcePaths::with_roots(&args.proc_path, &args.sys_path);
    if let Some(command) = args.vcgencmd.clone() {
        paths = paths.with_gpu_temp_command(command);
    }
    if let Some(command) = args.df.clone() {
        paths = paths.with_disk_command(command);
    }

    #[cfg(target_os = "linux")]
    let collector = Collector::with_paths(RealFs::new(), RealRunner::new(), paths);

    #[cfg(not(target_os = "linux"))]
    let collector = {
        info!("not running on Linux, using mock Raspberry Pi data");
        Collector::with_paths(MockFs::raspberry_pi(), MockRunner::raspberry_pi(), paths)
    };

    let output = match args.section {
        Some(section) => {
            collect_section(&collector, section).and_then(|value| render(&value, args.pretty))
        }
        None => {
            let snapshot = collector.collect_snapshot();
            info!("{}", snapshot.summary());
            render(&snapshot, args.pretty)
        }
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("failed to serialize output: {}", e);
            std::process::exit(1);
        }
    }
}

/// Collects a single reading as a JSON value.
fn collect_section<F: FileSystem, R: CommandRunner>(
    collector: &Collector<F, R>,
    section: Section,
) -> serde_json::Result<serde_json::Value> {
    match section {
        Section::Core => serde_json::to_value(collector.core_info()),
        Section::Uptime => serde_json::to_value(collector.uptime()),
        Section::Temperature => serde_json::to_value(collector.temperature()),
        Section::Stat => serde_json::to_value(collector.cpu_state()),
        Section::Memory => serde_json::to_value(collector.memory_info()),
        Section::LoadAvg => serde_json::to_value(collector.load_average()),
        Section::Net => serde_json::to_value(collector.network_info()),
        Section::Disk => serde_json::to_value(collector.disk_info()),
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
