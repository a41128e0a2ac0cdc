//! Command processor: the polled entry point tying everything together.
//!
//! Each [`Processor::run`] call shows the sign-on banner (first call only), writes
//! the prompt when one is owed, and handles at most one input byte. Bytes go
//! through the [`InputDecoder`] and then the line editor, which checks every
//! keystroke against the [`Registry`] and dispatches on Enter.

use crate::config::Config;
use crate::error::CliError;
use crate::io::{ByteIo, PortWriter};
use crate::registry::{Action, Command, Registry, RunResult};

// Sub-modules
pub mod builtins;
pub mod decoder;
pub mod editor;
pub mod history;

// Re-export key types
pub use decoder::{InputDecoder, InputEvent};
pub use editor::LineBuffer;
pub use history::CommandHistory;

/// Command processor.
///
/// Generic over:
/// - `'a`: Lifetime of the registered commands (typically `'static`)
/// - `IO`: [`ByteIo`] implementation
/// - `INPUT`: Backing capacity of the line buffer and of each history entry
/// - `DEPTH`: Backing capacity of the history
/// - `COMMANDS`: Backing capacity of the registry
///
/// Several processors may coexist, one per port.
pub struct Processor<
    'a,
    IO: ByteIo,
    const INPUT: usize = 128,
    const DEPTH: usize = 10,
    const COMMANDS: usize = 32,
> {
    /// Registered commands
    registry: Registry<'a, COMMANDS>,

    /// Live input line
    line: LineBuffer<INPUT>,

    /// Submitted lines
    history: CommandHistory<DEPTH, INPUT>,

    /// Lead-in state machine
    decoder: InputDecoder,

    /// Transport
    io: IO,

    /// Sign-on banner still to be shown
    banner: Option<&'a Command<'a>>,

    /// Prompt text
    prompt: &'a str,

    /// Prompt and keystroke echo
    echo: bool,

    /// Case rule for command matching
    case_insensitive: bool,

    /// A prompt is owed before the next line
    show_prompt: bool,

    /// History position before the last cancel, resumed by an `ESC [` arrow
    resume_at: usize,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<IO, const INPUT: usize, const DEPTH: usize, const COMMANDS: usize> core::fmt::Debug
    for Processor<'_, IO, INPUT, DEPTH, COMMANDS>
where
    IO: ByteIo,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Processor")
            .field("registry", &self.registry)
            .field("line", &self.line.as_str())
            .field("history_len", &self.history.len())
            .field("decoder", &self.decoder)
            .field("echo", &self.echo)
            .field("case_insensitive", &self.case_insensitive)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Core methods
// ============================================================================

impl<'a, IO, const INPUT: usize, const DEPTH: usize, const COMMANDS: usize>
    Processor<'a, IO, INPUT, DEPTH, COMMANDS>
where
    IO: ByteIo,
{
    /// Create a processor on `io`.
    ///
    /// Registers the banner and any enabled built-ins; those that do not fit in
    /// `COMMANDS` are skipped with a warning, as a failed [`add`](Self::add) is.
    /// Fails with `AllocationFailure` only if the configured line length exceeds
    /// `INPUT` or the history depth exceeds `DEPTH`.
    pub fn new(io: IO, config: Config<'a>) -> Result<Self, CliError> {
        let capacity = config.effective_command_len();
        if capacity > INPUT {
            log::warn!("line length {} exceeds buffer capacity {}", capacity, INPUT);
            return Err(CliError::AllocationFailure);
        }
        if config.history_depth > DEPTH {
            log::warn!(
                "history depth {} exceeds capacity {}",
                config.history_depth,
                DEPTH
            );
            return Err(CliError::AllocationFailure);
        }

        let mut processor = Self {
            registry: Registry::new(),
            line: LineBuffer::new(capacity),
            history: CommandHistory::new(config.history_depth),
            decoder: InputDecoder::new(),
            io,
            banner: config.banner,
            prompt: config.prompt,
            echo: config.echo,
            case_insensitive: config.case_insensitive,
            show_prompt: true,
            resume_at: 0,
        };

        let system: Option<[&'a Command<'a>; 4]> =
            config.enable_system.then_some(builtins::SYSTEM_COMMANDS);
        let exit: Option<&'a Command<'a>> = config.enable_exit.then_some(&builtins::EXIT);
        let initial = config
            .banner
            .into_iter()
            .chain(system.into_iter().flatten())
            .chain(exit);
        for command in initial {
            if processor.registry.add(command).is_err() {
                log::warn!("no room to register '{}'", command.name);
            }
        }

        log::debug!(
            "processor ready: line {}, history {}, {} commands",
            capacity,
            config.history_depth,
            processor.registry.len()
        );
        Ok(processor)
    }

    /// Register a command. Allowed at any time, including between polls.
    ///
    /// On `AllocationFailure` the command is simply not registered.
    pub fn add(&mut self, command: &'a Command<'a>) -> Result<(), CliError> {
        self.registry.add(command)
    }

    /// Poll once.
    ///
    /// Never waits: handles at most one byte. Returns the signal of a command
    /// executed by this byte, [`RunResult::Continue`] otherwise.
    pub fn run(&mut self) -> Result<RunResult, IO::Error> {
        if let Some(banner) = self.banner.take() {
            log::debug!("sign-on banner '{}'", banner.name);
            // The banner's own signal is not acted upon
            let _ = self.execute(banner, None)?;
        }

        if self.show_prompt && self.echo {
            self.io.write_str(self.prompt)?;
            self.show_prompt = false;
        }

        match self.io.read_byte()? {
            Some(b) => self.process_byte(b),
            None => Ok(RunResult::Continue),
        }
    }

    /// Process one byte obtained elsewhere (interrupt queue, DMA buffer, ...).
    ///
    /// Skips the banner and prompt handling of [`run`](Self::run).
    pub fn process_byte(&mut self, b: u8) -> Result<RunResult, IO::Error> {
        // The ESC of an arrow sequence has already cancelled the line
        let escaped = self.decoder.escaped_lead_in();

        match self.decoder.decode_byte(b) {
            InputEvent::None => {}
            InputEvent::Char(c) => self.handle_char(c)?,
            InputEvent::Backspace => self.handle_backspace()?,
            InputEvent::Cancel => self.handle_cancel()?,
            InputEvent::Tab => self.handle_tab()?,
            InputEvent::Previous => {
                if escaped {
                    self.history.seek(self.resume_at);
                }
                self.handle_previous()?
            }
            InputEvent::Next => {
                if escaped {
                    self.history.seek(self.resume_at);
                }
                self.handle_next()?
            }
            InputEvent::Enter => return self.handle_enter(),
        }
        Ok(RunResult::Continue)
    }

    /// Turn prompt and keystroke echo on or off.
    ///
    /// Matching and history are unaffected.
    pub fn set_echo(&mut self, on: bool) {
        self.echo = on;
    }

    /// Current echo state.
    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Tear the processor down, returning the port.
    pub fn end(self) -> IO {
        let Self { registry, io, .. } = self;
        log::debug!("processor ended with {} commands", registry.len());
        io
    }

    /// Registered commands.
    pub fn registry(&self) -> &Registry<'a, COMMANDS> {
        &self.registry
    }

    /// Live input line.
    pub fn line(&self) -> &str {
        self.line.as_str()
    }

    /// Command history.
    pub fn history(&self) -> &CommandHistory<DEPTH, INPUT> {
        &self.history
    }

    /// Reference to the port.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Mutable reference to the port.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Run `command`.
    ///
    /// The argument is the live line from byte `args_at` on, or empty for `None`.
    fn execute(
        &mut self,
        command: &'a Command<'a>,
        args_at: Option<usize>,
    ) -> Result<RunResult, IO::Error> {
        let args = match args_at {
            Some(at) => self.line.as_str().get(at..).unwrap_or(""),
            None => "",
        };
        log::debug!("dispatch '{}' args '{}'", command.name, args);

        match command.action {
            Action::Run(handler) => {
                let mut out = PortWriter::new(&mut self.io);
                let result = handler.execute(args, &mut out);
                out.finish()?;
                Ok(result)
            }
            Action::Help => builtins::help(&mut self.io, &self.registry),
            Action::History => builtins::history(&mut self.io, &self.history, self.line.as_str()),
            Action::Echo => {
                if let Some(on) = builtins::parse_echo(args) {
                    self.echo = on;
                }
                builtins::report_echo(&mut self.io, self.echo)
            }
            Action::Exit => builtins::exit(&mut self.io),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
