//! Line editing: keystroke validation, erase, completion, recall and submit.
//!
//! The live line only ever holds text that starts one or more registered command
//! names (up to the first space). Characters that would break this, or overflow
//! the configured capacity, are refused with a bell.

use super::Processor;
use crate::error::CliError;
use crate::io::ByteIo;
use crate::registry::{Command, RunResult, matching};

/// Alert byte written for refused input.
pub const BELL: u8 = 0x07;

/// Terminal sequence erasing the character left of the cursor.
const ERASE: &str = "\x08 \x08";

/// Bounded line buffer.
///
/// Backing storage holds `N` bytes; the working capacity chosen at construction
/// may be smaller. Appends that would pass the capacity are refused, never
/// truncated.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize> {
    text: heapless::String<N>,
    capacity: usize,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer with working capacity `capacity` (at most `N`).
    pub fn new(capacity: usize) -> Self {
        Self {
            text: heapless::String::new(),
            capacity: capacity.min(N),
        }
    }

    /// Append one ASCII byte. Returns false if the buffer is full.
    pub fn push(&mut self, b: u8) -> bool {
        self.text.len() < self.capacity && self.text.push(b as char).is_ok()
    }

    /// Append a string. Returns false, leaving the buffer unchanged, if it does
    /// not fit.
    pub fn push_str(&mut self, s: &str) -> bool {
        self.text.len() + s.len() <= self.capacity && self.text.push_str(s).is_ok()
    }

    /// Remove the last character.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Replace the whole content. Returns false, leaving the buffer unchanged, if
    /// `s` does not fit.
    pub fn replace(&mut self, s: &str) -> bool {
        if s.len() > self.capacity {
            return false;
        }
        self.text.clear();
        self.text.push_str(s).is_ok()
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Current content.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Working capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Printable ASCII, space through tilde.
fn is_printable(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}

impl<'a, IO, const INPUT: usize, const DEPTH: usize, const COMMANDS: usize>
    Processor<'a, IO, INPUT, DEPTH, COMMANDS>
where
    IO: ByteIo,
{
    /// Printable character: keep it only if the line still matches a command.
    pub(super) fn handle_char(&mut self, c: u8) -> Result<(), IO::Error> {
        if !is_printable(c) || !self.line.push(c) {
            return self.bell();
        }

        if self
            .registry
            .find(self.line.as_str(), self.case_insensitive)
            .count()
            == 0
        {
            self.line.pop();
            return self.bell();
        }

        if self.echo {
            self.io.write_byte(c)?;
        }
        Ok(())
    }

    /// Backspace: drop and erase the last character.
    pub(super) fn handle_backspace(&mut self) -> Result<(), IO::Error> {
        match self.line.pop() {
            Some(_) => self.erase(1),
            None => self.bell(),
        }
    }

    /// Escape: clear the line and return to the live position in history.
    pub(super) fn handle_cancel(&mut self) -> Result<(), IO::Error> {
        let shown = self.line.len();
        self.line.clear();
        self.resume_at = self.history.position();
        self.history.reset_position();
        self.erase(shown)
    }

    /// Tab: complete the command name when exactly one command matches.
    #[cfg(feature = "completion")]
    pub(super) fn handle_tab(&mut self) -> Result<(), IO::Error> {
        let found = self.registry.find(self.line.as_str(), self.case_insensitive);
        let Some(command) = found.unique() else {
            return Ok(());
        };
        let Some(suffix) = matching::completion_suffix(self.line.as_str(), command) else {
            return Ok(());
        };

        if !self.line.push_str(suffix) {
            return self.bell();
        }
        if self.echo {
            self.io.write_str(suffix)?;
        }
        Ok(())
    }

    /// Tab (completion disabled): alert only.
    #[cfg(not(feature = "completion"))]
    pub(super) fn handle_tab(&mut self) -> Result<(), IO::Error> {
        self.bell()
    }

    /// Up arrow: show the previous history line, or cancel at the oldest.
    pub(super) fn handle_previous(&mut self) -> Result<(), IO::Error> {
        let shown = self.line.len();
        let recalled = self
            .history
            .previous_command()
            .map(|entry| self.line.replace(entry));

        match recalled {
            Some(_) => self.redraw(shown),
            None => self.handle_cancel(),
        }
    }

    /// Down arrow: show the next history line, if any.
    pub(super) fn handle_next(&mut self) -> Result<(), IO::Error> {
        let shown = self.line.len();
        let recalled = self
            .history
            .next_command()
            .map(|entry| self.line.replace(entry));

        match recalled {
            Some(_) => self.redraw(shown),
            None => Ok(()),
        }
    }

    /// Enter: resolve and run the line, then start a new one.
    pub(super) fn handle_enter(&mut self) -> Result<RunResult, IO::Error> {
        let mut result = RunResult::Continue;

        if self.line.is_empty() {
            self.io.write_line("")?;
        } else {
            match self.resolve() {
                Ok(command) => {
                    self.canonicalize(command)?;
                    if self.echo {
                        self.io.write_str("\r\n")?;
                    }
                    let args_at = matching::args_offset(self.line.as_str());
                    result = self.execute(command, Some(args_at))?;
                    self.history.push(self.line.as_str());
                    self.history.reset_position();
                }
                Err(e) => {
                    log::debug!("'{}' rejected: {}", self.line.as_str(), e);
                    self.io.write_line(e.user_message())?;
                }
            }
        }

        self.line.clear();
        self.show_prompt = true;
        Ok(result)
    }

    /// The single command the live line names.
    fn resolve(&self) -> Result<&'a Command<'a>, CliError> {
        let found = self.registry.find(self.line.as_str(), self.case_insensitive);
        match found.unique() {
            Some(command) => Ok(command),
            None if found.count() == 0 => Err(CliError::CommandNotFound),
            None => Err(CliError::AmbiguousCommand {
                matches: found.count(),
            }),
        }
    }

    /// Rewrite an abbreviated or miscased keyword to the full command name,
    /// keeping the argument text, and show the corrected line.
    ///
    /// The separator is only written before an argument: an argument-less line
    /// becomes the bare name (`"he"` → `"Help"`), without a trailing space, so
    /// the shown line and the stored history entry match what typing the full
    /// name produces. Left as typed when the rewritten line would not fit.
    fn canonicalize(&mut self, command: &'a Command<'a>) -> Result<(), IO::Error> {
        let (keyword, args) = matching::split_keyword(self.line.as_str());
        if !matching::needs_canonical(keyword, command.name) {
            return Ok(());
        }

        let mut canonical: heapless::String<INPUT> = heapless::String::new();
        let built = canonical.push_str(command.name).is_ok()
            && (args.is_empty() || (canonical.push(' ').is_ok() && canonical.push_str(args).is_ok()));

        let shown = self.line.len();
        if !built || !self.line.replace(&canonical) {
            log::debug!("line too long to rewrite as '{}'", command.name);
            return Ok(());
        }
        self.redraw(shown)
    }

    /// Erase `shown` characters and echo the whole line.
    fn redraw(&mut self, shown: usize) -> Result<(), IO::Error> {
        self.erase(shown)?;
        if self.echo {
            self.io.write_str(self.line.as_str())?;
        }
        Ok(())
    }

    /// Visually erase `count` characters.
    fn erase(&mut self, count: usize) -> Result<(), IO::Error> {
        if self.echo {
            for _ in 0..count {
                self.io.write_str(ERASE)?;
            }
        }
        Ok(())
    }

    fn bell(&mut self) -> Result<(), IO::Error> {
        self.io.write_byte(BELL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_buffer_capacity() {
        let mut line = LineBuffer::<16>::new(3);
        assert!(line.push(b'a'));
        assert!(line.push(b'b'));
        assert!(line.push(b'c'));
        assert!(!line.push(b'd'));
        assert_eq!(line.as_str(), "abc");
    }

    #[test]
    fn test_line_buffer_capacity_clamped_to_storage() {
        let line = LineBuffer::<4>::new(10);
        assert_eq!(line.capacity(), 4);
    }

    #[test]
    fn test_line_buffer_push_str_all_or_nothing() {
        let mut line = LineBuffer::<16>::new(5);
        assert!(line.push_str("Hel"));
        assert!(!line.push_str("lo!"));
        assert_eq!(line.as_str(), "Hel");
        assert!(line.push_str("lo"));
        assert_eq!(line.as_str(), "Hello");
    }

    #[test]
    fn test_line_buffer_replace() {
        let mut line = LineBuffer::<16>::new(6);
        line.push_str("ab");
        assert!(!line.replace("too long"));
        assert_eq!(line.as_str(), "ab");
        assert!(line.replace("Help"));
        assert_eq!(line.as_str(), "Help");
        assert_eq!(line.pop(), Some('p'));
        line.clear();
        assert!(line.is_empty());
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable(b' '));
        assert!(is_printable(b'~'));
        assert!(!is_printable(0x1F));
        assert!(!is_printable(0x7F));
        assert!(!is_printable(0xE1));
    }
}
