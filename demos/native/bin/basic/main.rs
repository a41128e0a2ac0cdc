//! Basic demo: a data-logger console on the native terminal.
//!
//! Registers a sign-on banner and a few logger commands next to the built-ins,
//! then polls the processor until `Exit` or Ctrl+C.
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin basic
//! ```

use cmdproc::{Action, Command, Config, Processor, RunResult};
use core::fmt::Write;
use native_demos::{RawModeGuard, StdioByteIo};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::thread;
use std::time::Duration;

// =============================================================================
// Logger State
// =============================================================================

/// 0 idle, 1 logging
static MODE: AtomicU8 = AtomicU8::new(0);

static FILENAME: Mutex<String> = Mutex::new(String::new());

const DEFAULT_FILENAME: &str = "default.csv";

// =============================================================================
// Commands
// =============================================================================

fn about(_args: &str, out: &mut dyn Write) -> RunResult {
    let _ = write!(out, "{} {} data logger console\r\n", cmdproc::NAME, cmdproc::VERSION);
    RunResult::Continue
}

fn mode(args: &str, out: &mut dyn Write) -> RunResult {
    let reply = if args.contains('0') {
        MODE.store(0, Ordering::Relaxed);
        "deactivated"
    } else if args.contains('1') {
        MODE.store(1, Ordering::Relaxed);
        "activated"
    } else {
        "bad mode"
    };
    let _ = write!(out, "{}\r\n", reply);
    RunResult::Continue
}

fn filename(args: &str, out: &mut dyn Write) -> RunResult {
    let Ok(mut name) = FILENAME.lock() else {
        let _ = out.write_str("filename unavailable\r\n");
        return RunResult::Continue;
    };

    if args.is_empty() {
        let shown = if name.is_empty() { DEFAULT_FILENAME } else { name.as_str() };
        let _ = write!(out, "{}\r\n", shown);
    } else {
        name.clear();
        name.push_str(args);
        log::info!("log file set to '{}'", args);
    }
    let _ = out.write_str("success\r\n");
    RunResult::Continue
}

fn check(_args: &str, out: &mut dyn Write) -> RunResult {
    if MODE.load(Ordering::Relaxed) == 0 {
        let _ = out.write_str("Pressure sensor: 1.013\r\nTemp sensor = 21.500\r\n");
    } else {
        let _ = out.write_str("busy logging, use 'Mode 0' first\r\n");
    }
    RunResult::Continue
}

static ABOUT: Command = Command::hidden("About", "Banner on start", Action::Run(&about));
static MODE_CMD: Command = Command::new(
    "Mode",
    "Select run mode (0 - do nothing; 1 - logging mode)",
    Action::Run(&mode),
);
static FILENAME_CMD: Command = Command::new(
    "Filename",
    "Get filename (w/o args) or set a new one",
    Action::Run(&filename),
);
static CHECK_CMD: Command = Command::new("Check", "Check control of subsystems", Action::Run(&check));

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("cmdproc basic demo");
    println!("==================\n");
    println!("Type 'Help' or '?' for help, 'Exit' or Ctrl+C to quit.\n");

    let config = Config::interactive()
        .banner(&ABOUT)
        .max_command_len(80)
        .history_depth(5);
    let mut processor: Processor<StdioByteIo> = Processor::new(StdioByteIo::new(), config)?;
    for command in [&MODE_CMD, &FILENAME_CMD, &CHECK_CMD] {
        processor.add(command)?;
    }

    let _raw = RawModeGuard::new()?;

    // Never waits inside the processor; idle pacing is up to the loop
    while !processor.io().interrupted() {
        if processor.run()? == RunResult::Exit {
            break;
        }
        if processor.line().is_empty() {
            thread::sleep(Duration::from_millis(5));
        }
    }

    processor.end();
    Ok(())
}
