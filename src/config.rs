//! Runtime configuration for a [`Processor`](crate::Processor).
//!
//! Backing storage is sized at compile time by the processor's const parameters;
//! `Config` picks the working sizes inside that storage and the behavior flags.

use crate::registry::Command;

/// Floor applied to the configured maximum command length.
pub const MIN_COMMAND_LEN: usize = 6;

/// Processor configuration.
///
/// Built with chained setters:
///
/// ```rust,ignore
/// let config = Config::default()
///     .with_system_commands()
///     .with_exit()
///     .echo(true)
///     .case_insensitive(true)
///     .max_command_len(50)
///     .history_depth(5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Config<'a> {
    /// Command invoked once, with an empty argument, on the first poll
    pub banner: Option<&'a Command<'a>>,

    /// Register the built-in `Exit` command
    pub enable_exit: bool,

    /// Register the built-in `Help`, `?`, `History` and `Echo` commands
    pub enable_system: bool,

    /// Start with prompt and character echo on
    pub echo: bool,

    /// Match command names ignoring ASCII case
    pub case_insensitive: bool,

    /// Maximum characters in one line, command and arguments together
    pub max_command_len: usize,

    /// Number of submitted lines kept for recall
    pub history_depth: usize,

    /// Prompt written when a new line is expected (echo only)
    pub prompt: &'a str,
}

impl<'a> Config<'a> {
    /// Interactive preset: system commands, `Exit`, echo on, case-insensitive.
    pub fn interactive() -> Self {
        Self::default()
            .with_system_commands()
            .with_exit()
            .echo(true)
            .case_insensitive(true)
    }

    /// Set the sign-on banner command.
    pub fn banner(mut self, command: &'a Command<'a>) -> Self {
        self.banner = Some(command);
        self
    }

    /// Enable the built-in `Exit` command.
    pub fn with_exit(mut self) -> Self {
        self.enable_exit = true;
        self
    }

    /// Enable the built-in system commands.
    pub fn with_system_commands(mut self) -> Self {
        self.enable_system = true;
        self
    }

    /// Set the initial echo state.
    pub fn echo(mut self, on: bool) -> Self {
        self.echo = on;
        self
    }

    /// Select case-insensitive command matching.
    pub fn case_insensitive(mut self, on: bool) -> Self {
        self.case_insensitive = on;
        self
    }

    /// Set the maximum line length.
    ///
    /// Values below [`MIN_COMMAND_LEN`] are raised to it.
    pub fn max_command_len(mut self, len: usize) -> Self {
        self.max_command_len = len;
        self
    }

    /// Set the history depth.
    pub fn history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    /// Set the prompt string.
    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Line length after applying the floor.
    pub fn effective_command_len(&self) -> usize {
        self.max_command_len.max(MIN_COMMAND_LEN)
    }
}

impl Default for Config<'_> {
    fn default() -> Self {
        Self {
            banner: None,
            enable_exit: false,
            enable_system: false,
            echo: false,
            case_insensitive: false,
            max_command_len: 80,
            history_depth: 10,
            prompt: ">",
        }
    }
}
