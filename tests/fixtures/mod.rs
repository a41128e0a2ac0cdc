//! Test fixtures and utilities for cmdproc testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of the ByteIo trait
//! - Static command tables used across the integration tests
//! - Config presets sized for `TestProcessor`

#![allow(dead_code)]

use cmdproc::{Action, ByteIo, Command, Config, Processor, RunResult};
use core::fmt::Write;
use std::collections::VecDeque;

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock I/O for testing.
///
/// Provides in-memory byte I/O with input queue and output capture.
/// Uses `std` types (VecDeque, Vec) since tests run with std support.
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates user typing)
    input: VecDeque<u8>,

    /// Output capture (collects all output)
    output: Vec<u8>,

    /// Fail every write once set
    broken: bool,
}

impl MockIo {
    /// Create new MockIo with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockIo with pre-loaded input string.
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.bytes().collect(),
            ..Self::default()
        }
    }

    /// Add input to queue (simulates user typing).
    pub fn push_input(&mut self, s: &str) {
        self.input.extend(s.bytes());
    }

    /// Add raw bytes to the input queue (arrow keys and other non-text input).
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    /// Get captured output as string.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Get captured output as bytes (useful for checking bells and erase sequences).
    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Check if input queue is empty.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Make every following write fail.
    pub fn break_port(&mut self) {
        self.broken = true;
    }
}

impl ByteIo for MockIo {
    type Error = ();

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.broken {
            return Err(());
        }
        self.output.push(byte);
        Ok(())
    }
}

// ============================================================================
// Command tables
// ============================================================================

fn who(args: &str, out: &mut dyn Write) -> RunResult {
    let _ = write!(out, "who... [{}]\r\n", args);
    RunResult::Continue
}

fn args(args: &str, out: &mut dyn Write) -> RunResult {
    let _ = write!(out, "args=<{}>\r\n", args);
    RunResult::Continue
}

fn go(_args: &str, out: &mut dyn Write) -> RunResult {
    let _ = out.write_str("going\r\n");
    RunResult::Continue
}

fn gop(_args: &str, out: &mut dyn Write) -> RunResult {
    let _ = out.write_str("gopping\r\n");
    RunResult::Continue
}

fn about(_args: &str, out: &mut dyn Write) -> RunResult {
    let _ = out.write_str("Test device v1.0\r\n");
    RunResult::Exit
}

fn quit(_args: &str, _out: &mut dyn Write) -> RunResult {
    RunResult::Exit
}

/// `who`: prints its argument
pub static CMD_WHO: Command = Command::new("who", "Shows who is logged on", Action::Run(&who));

/// `Args`: prints its argument between angle brackets
pub static CMD_ARGS: Command = Command::new("Args", "Shows its arguments", Action::Run(&args));

/// `Go`: shares its name as a prefix with `Gop`
pub static CMD_GO: Command = Command::new("Go", "Go somewhere", Action::Run(&go));

/// `Gop`
pub static CMD_GOP: Command = Command::new("Gop", "Gop somewhere", Action::Run(&gop));

/// Hidden sign-on banner (asks to exit, which must be ignored)
pub static CMD_ABOUT: Command = Command::hidden("About", "About this device", Action::Run(&about));

/// `Quit`: application-level exit
pub static CMD_QUIT: Command = Command::new("Quit", "Leaves the loop", Action::Run(&quit));

// ============================================================================
// Processor configuration
// ============================================================================

/// Processor sized for the tests: 64-byte lines, 5 history entries, 16 commands.
pub type TestProcessor = Processor<'static, MockIo, 64, 5, 16>;

/// Echo on, system commands, `Exit`, case-insensitive, sized for `TestProcessor`.
pub fn interactive_config() -> Config<'static> {
    Config::interactive().max_command_len(64).history_depth(5)
}

/// Everything off, sized for `TestProcessor`.
pub fn quiet_config() -> Config<'static> {
    Config::default().max_command_len(64).history_depth(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_io_basic() {
        let mut io = MockIo::new();

        io.push_input("hi");
        assert_eq!(io.read_byte().unwrap(), Some(b'h'));
        assert_eq!(io.read_byte().unwrap(), Some(b'i'));
        assert_eq!(io.read_byte().unwrap(), None);

        io.write_byte(b'x').unwrap();
        io.write_line("yz").unwrap();
        assert_eq!(io.output(), "xyz\r\n");
    }

    #[test]
    fn test_mock_io_broken_port() {
        let mut io = MockIo::with_input("a");
        io.break_port();
        assert_eq!(io.write_byte(b'x'), Err(()));
        assert_eq!(io.read_byte().unwrap(), Some(b'a'));
        assert!(io.input_empty());
    }
}
