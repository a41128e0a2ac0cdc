//! Shared I/O implementation for native demos

use cmdproc::ByteIo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

// =============================================================================
// Terminal Raw Mode Guard
// =============================================================================

/// RAII guard that enables raw terminal mode on creation and restores on drop.
///
/// Raw mode provides:
/// - No local echo (the processor controls all echoing)
/// - No line buffering (process bytes immediately)
/// - No special key processing by terminal (Tab, arrows passed to the processor)
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

// =============================================================================
// I/O Implementation
// =============================================================================

/// Host-keyboard lead-in, as a Windows console sends before arrow keys.
const LEAD_IN: u8 = 0xE0;

/// Non-blocking stdin/stdout port.
///
/// Key events are polled with a zero timeout and translated to the bytes a serial
/// terminal would send. Arrow keys use the two-byte host-keyboard encoding, so
/// they never go through the `ESC` cancel path.
pub struct StdioByteIo {
    pending: VecDeque<u8>,
    interrupted: bool,
}

impl StdioByteIo {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            interrupted: false,
        }
    }

    /// True once Ctrl+C has been pressed.
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    fn translate(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.interrupted = true;
            }
            KeyCode::Char(c) if c.is_ascii() => self.pending.push_back(c as u8),
            KeyCode::Enter => self.pending.push_back(b'\r'),
            KeyCode::Tab => self.pending.push_back(b'\t'),
            KeyCode::Backspace => self.pending.push_back(0x08),
            KeyCode::Esc => self.pending.push_back(0x1B),
            KeyCode::Up => self.pending.extend([LEAD_IN, 0x48]),
            KeyCode::Down => self.pending.extend([LEAD_IN, 0x50]),
            other => log::trace!("key {:?} not forwarded", other),
        }
    }
}

impl Default for StdioByteIo {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteIo for StdioByteIo {
    type Error = io::Error;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if self.pending.is_empty() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.translate(key);
            }
        }
        Ok(self.pending.pop_front())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        let mut stdout = io::stdout();
        stdout.write_all(&[byte])?;
        stdout.flush()
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        let mut stdout = io::stdout();
        stdout.write_all(s.as_bytes())?;
        stdout.flush()
    }
}
