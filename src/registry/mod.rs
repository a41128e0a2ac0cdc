//! Command descriptors and the sorted command registry.
//!
//! Commands are caller-owned and usually `static`. The registry only stores
//! references to them, kept in case-insensitive alphabetical order.

use crate::error::CliError;
use core::cmp::Ordering;
use core::fmt;

pub mod matching;

pub use matching::PrefixMatch;

/// Signal returned by a command: keep the processor running or exit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunResult {
    /// Keep running
    Continue,

    /// The command asks the processor (usually the program) to exit
    Exit,
}

/// Command execution trait.
///
/// Receives the argument text (everything after the first space, possibly empty)
/// and a writer connected to the processor's port.
///
/// Implemented for every `Fn(&str, &mut dyn fmt::Write) -> RunResult`, so a plain
/// function can be referenced from a `static` command:
///
/// ```rust,ignore
/// fn who(args: &str, out: &mut dyn core::fmt::Write) -> RunResult {
///     let _ = write!(out, "who... [{}]\r\n", args);
///     RunResult::Continue
/// }
///
/// static WHO: Command = Command::new("who", "Shows who is logged on", Action::Run(&who));
/// ```
pub trait CommandHandler {
    /// Execute with the given argument text.
    fn execute(&self, args: &str, out: &mut dyn fmt::Write) -> RunResult;
}

impl<F> CommandHandler for F
where
    F: Fn(&str, &mut dyn fmt::Write) -> RunResult,
{
    fn execute(&self, args: &str, out: &mut dyn fmt::Write) -> RunResult {
        self(args, out)
    }
}

/// What a command does when it is executed.
///
/// Built-in variants are serviced by the processor itself because they need its
/// state (registry, history, echo flag).
#[derive(Clone, Copy)]
pub enum Action<'a> {
    /// Application callback
    Run(&'a (dyn CommandHandler + Sync)),

    /// List visible commands
    Help,

    /// List history entries and the live line
    History,

    /// Show or change the echo state
    Echo,

    /// Say goodbye and exit
    Exit,
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Run(_) => f.write_str("Run(<dyn CommandHandler>)"),
            Action::Help => f.write_str("Help"),
            Action::History => f.write_str("History"),
            Action::Echo => f.write_str("Echo"),
            Action::Exit => f.write_str("Exit"),
        }
    }
}

/// Command descriptor (const-initializable).
#[derive(Debug, Clone, Copy)]
pub struct Command<'a> {
    /// Command name, matched against the first word of the line
    pub name: &'a str,

    /// One-line description shown by `Help`
    pub help: &'a str,

    /// What to run
    pub action: Action<'a>,

    /// Listed by `Help`
    pub visible: bool,
}

impl<'a> Command<'a> {
    /// Create a visible command.
    pub const fn new(name: &'a str, help: &'a str, action: Action<'a>) -> Self {
        Self {
            name,
            help,
            action,
            visible: true,
        }
    }

    /// Create a command hidden from `Help`.
    pub const fn hidden(name: &'a str, help: &'a str, action: Action<'a>) -> Self {
        Self {
            name,
            help,
            action,
            visible: false,
        }
    }
}

/// Ordered set of command references with bounded capacity `N`.
pub struct Registry<'a, const N: usize> {
    commands: heapless::Vec<&'a Command<'a>, N>,
    longest: usize,
}

impl<'a, const N: usize> Registry<'a, N> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            commands: heapless::Vec::new(),
            longest: 0,
        }
    }

    /// Insert a command in case-insensitive alphabetical order.
    ///
    /// Only the first `command.name.len()` characters take part in the ordering,
    /// and a new command goes after any entry that ranks equal to it. Duplicate
    /// names are accepted.
    ///
    /// Fails with `AllocationFailure` when all `N` slots are taken; the registry is
    /// left untouched in that case.
    pub fn add(&mut self, command: &'a Command<'a>) -> Result<(), CliError> {
        let at = self
            .commands
            .iter()
            .position(|c| matching::collate(c.name, command.name) == Ordering::Greater)
            .unwrap_or(self.commands.len());

        if self.commands.insert(at, command).is_err() {
            log::warn!("registry full, '{}' not added", command.name);
            return Err(CliError::AllocationFailure);
        }

        self.longest = self.longest.max(command.name.len());
        log::debug!("registered '{}' at {}", command.name, at);
        Ok(())
    }

    /// Resolve `text` against every registered name.
    ///
    /// See [`PrefixMatch`] for the comparison rules.
    pub fn find(&self, text: &str, case_insensitive: bool) -> PrefixMatch<'a> {
        let (keyword, _) = matching::split_keyword(text);
        let mut found = PrefixMatch::new(keyword.len());

        if text.is_empty() {
            return found;
        }

        for command in self.iter() {
            if matching::name_matches(keyword, command.name, case_insensitive) {
                found.record(command);
            }
        }

        found
    }

    /// Commands in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Command<'a>> + '_ {
        self.commands.iter().copied()
    }

    /// Length of the longest registered name.
    pub fn longest_name(&self) -> usize {
        self.longest
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.longest = 0;
    }
}

impl<const N: usize> Default for Registry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Registry<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.commands.iter().map(|c| c.name))
            .finish()
    }
}
