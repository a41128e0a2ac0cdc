//! Input decoder for raw terminal bytes.
//!
//! Turns each received byte into a logical input event. Arrow keys arrive as a
//! lead-in byte followed by one key byte; two lead-ins are recognized:
//!
//! - `0x5B` (`[`), the second byte of the VT100 `ESC [` pair. The `ESC` itself has
//!   already been reported as [`InputEvent::Cancel`].
//! - `0xE0`, sent by some host keyboard drivers (Windows console).
//!
//! Key bytes after a lead-in: `0x41`/`0x48` up, `0x42`/`0x50` down. Anything else
//! is swallowed. This is not a general ANSI parser.
//!
//! The decoder remembers whether a `[` lead-in came straight after `ESC`, so the
//! editor can tell an arrow key from an Escape press followed by a bracket.
//!
//! Pure state machine - doesn't manage buffers or perform I/O.

/// Lead-in byte of the VT100 cursor sequences (after `ESC`).
pub const LEAD_IN_CSI: u8 = 0x5B;

/// Lead-in byte used by some host keyboard drivers.
pub const LEAD_IN_HOST: u8 = 0xE0;

/// Decoder state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputState {
    /// Normal input mode
    Normal,

    /// Previous byte was `ESC`
    Escape,

    /// Saw a lead-in byte; the next byte is a key code
    LeadIn,

    /// Saw `ESC [`; the next byte is a key code
    EscapedLeadIn,
}

/// Logical input event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// No event (lead-in consumed, unknown key code, or NUL)
    None,

    /// Any other byte; the editor decides whether it is acceptable
    Char(u8),

    /// Backspace key (ASCII BS or DEL)
    Backspace,

    /// Enter key (line feed or carriage return)
    Enter,

    /// Tab key
    Tab,

    /// Escape key
    Cancel,

    /// Up arrow (recall older line)
    Previous,

    /// Down arrow (recall newer line)
    Next,
}

/// Terminal input decoder with lead-in handling.
#[derive(Debug)]
pub struct InputDecoder {
    /// Current decoder state
    state: InputState,
}

impl InputDecoder {
    /// Create new decoder in Normal state.
    pub fn new() -> Self {
        Self {
            state: InputState::Normal,
        }
    }

    /// Decode a single byte into an input event.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(decoder.decode_byte(b'h'), InputEvent::Char(b'h'));
    ///
    /// // Up arrow (ESC [ A): ESC cancels, '[' is the lead-in, 'A' the key
    /// assert_eq!(decoder.decode_byte(0x1B), InputEvent::Cancel);
    /// assert_eq!(decoder.decode_byte(b'['), InputEvent::None);
    /// assert_eq!(decoder.decode_byte(b'A'), InputEvent::Previous);
    /// ```
    pub fn decode_byte(&mut self, b: u8) -> InputEvent {
        match self.state {
            InputState::Normal => self.decode_normal(b),
            InputState::Escape if b == LEAD_IN_CSI => {
                self.state = InputState::EscapedLeadIn;
                InputEvent::None
            }
            InputState::Escape => {
                self.state = InputState::Normal;
                self.decode_normal(b)
            }
            InputState::LeadIn | InputState::EscapedLeadIn => self.decode_lead_in(b),
        }
    }

    /// Decode byte in Normal state.
    fn decode_normal(&mut self, b: u8) -> InputEvent {
        match b {
            LEAD_IN_CSI | LEAD_IN_HOST => {
                log::trace!("lead-in {:#04x}", b);
                self.state = InputState::LeadIn;
                InputEvent::None
            }

            0x00 => InputEvent::None,

            0x1B => {
                self.state = InputState::Escape;
                InputEvent::Cancel
            }

            b'\r' | b'\n' => InputEvent::Enter,

            b'\t' => InputEvent::Tab,

            // Backspace - ASCII BS (0x08) or DEL (0x7F)
            0x08 | 0x7F => InputEvent::Backspace,

            _ => InputEvent::Char(b),
        }
    }

    /// Decode the key byte following a lead-in.
    fn decode_lead_in(&mut self, b: u8) -> InputEvent {
        // One key byte only, whatever it is
        self.state = InputState::Normal;

        match b {
            0x41 | 0x48 => InputEvent::Previous,
            0x42 | 0x50 => InputEvent::Next,
            _ => {
                log::trace!("ignored key code {:#04x} after lead-in", b);
                InputEvent::None
            }
        }
    }

    /// Reset decoder state to Normal.
    pub fn reset(&mut self) {
        self.state = InputState::Normal;
    }

    /// True while waiting for the key byte of a lead-in pair.
    pub fn lead_in_pending(&self) -> bool {
        matches!(self.state, InputState::LeadIn | InputState::EscapedLeadIn)
    }

    /// True while waiting for the key byte of an `ESC [` sequence.
    pub fn escaped_lead_in(&self) -> bool {
        self.state == InputState::EscapedLeadIn
    }

    /// Get current decoder state (for testing/debugging).
    #[cfg(test)]
    pub fn state(&self) -> InputState {
        self.state
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}
