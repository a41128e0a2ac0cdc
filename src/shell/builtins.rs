//! Built-in commands.
//!
//! Registered by [`Processor::new`](super::Processor::new) when enabled in the
//! [`Config`](crate::Config). Their actions need processor state (registry, history,
//! echo flag), so they are plain [`Action`] variants rather than handlers.

use core::fmt::Write;

use crate::io::{ByteIo, PortWriter};
use crate::registry::{Action, Command, Registry, RunResult};
use crate::shell::CommandHistory;

/// `Help`: list visible commands.
pub static HELP: Command<'static> = Command::new(
    "Help",
    "Help or '?' shows this help, 'Help ?' shows more details.",
    Action::Help,
);

/// `?`: hidden alias of `Help`.
pub static QUESTION: Command<'static> = Command::hidden(
    "?",
    "Shows this help, '? ?' shows more details.",
    Action::Help,
);

/// `History`: list submitted lines.
pub static HISTORY: Command<'static> =
    Command::new("History", "Show command history", Action::History);

/// `Echo`: show or change the echo state.
pub static ECHO: Command<'static> = Command::new(
    "Echo",
    "Echo [1|on|0|off] turns echo on or off.",
    Action::Echo,
);

/// `Exit`: leave the command loop.
pub static EXIT: Command<'static> = Command::new("Exit", "Exits the program", Action::Exit);

/// Commands enabled by [`Config::with_system_commands`](crate::Config::with_system_commands).
pub static SYSTEM_COMMANDS: [&Command<'static>; 4] = [&QUESTION, &HELP, &HISTORY, &ECHO];

/// One line per visible command, names padded to the longest name, then a blank
/// line.
pub fn help<IO: ByteIo, const N: usize>(
    io: &mut IO,
    registry: &Registry<'_, N>,
) -> Result<RunResult, IO::Error> {
    let width = registry.longest_name();
    let mut out = PortWriter::new(io);
    for command in registry.iter().filter(|c| c.visible) {
        let _ = write!(out, " {:<width$}: {}\r\n", command.name, command.help);
    }
    let _ = out.write_str("\r\n");
    out.finish()?;
    Ok(RunResult::Continue)
}

/// Stored lines labelled by their offset, then the live line as offset 0.
pub fn history<IO: ByteIo, const D: usize, const I: usize>(
    io: &mut IO,
    history: &CommandHistory<D, I>,
    live: &str,
) -> Result<RunResult, IO::Error> {
    let mut out = PortWriter::new(io);
    for (offset, line) in history.enumerate(live) {
        let _ = write!(out, "  {:>2}: {}\r\n", offset, line);
    }
    out.finish()?;
    Ok(RunResult::Continue)
}

/// Parse the `Echo` argument.
///
/// `1` or `on` turns echo on, `0` or `off` turns it off (words compared without
/// case, on their leading characters). Anything else leaves echo unchanged.
pub fn parse_echo(args: &str) -> Option<bool> {
    let starts = |word: &str| {
        args.as_bytes()
            .get(..word.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(word.as_bytes()))
    };

    if args.starts_with('1') || starts("on") {
        Some(true)
    } else if args.starts_with('0') || starts("off") {
        Some(false)
    } else {
        None
    }
}

/// Report the echo state.
pub fn report_echo<IO: ByteIo>(io: &mut IO, on: bool) -> Result<RunResult, IO::Error> {
    io.write_line(if on { "Echo is on" } else { "Echo is off" })?;
    Ok(RunResult::Continue)
}

/// Say goodbye and ask the caller to leave its loop.
pub fn exit<IO: ByteIo>(io: &mut IO) -> Result<RunResult, IO::Error> {
    io.write_line("bye.")?;
    Ok(RunResult::Exit)
}
