//! Command history with up/down arrow navigation.
//!
//! Uses stub type pattern - struct always exists, but behavior is feature-gated.

#![cfg_attr(not(feature = "history"), allow(unused_variables))]

#[cfg(not(feature = "history"))]
use core::marker::PhantomData;

/// Command history storage.
///
/// When `history` feature is enabled, keeps up to `depth` lines (at most `N`) in
/// submission order and a navigation index in `0..=len`, where `len` stands for the
/// live line. When disabled, zero-size stub that no-ops all operations.
#[derive(Debug)]
pub struct CommandHistory<const N: usize, const INPUT_SIZE: usize> {
    #[cfg(feature = "history")]
    entries: heapless::Vec<heapless::String<INPUT_SIZE>, N>,

    #[cfg(feature = "history")]
    depth: usize,

    #[cfg(feature = "history")]
    index: usize,

    #[cfg(not(feature = "history"))]
    _phantom: PhantomData<[u8; INPUT_SIZE]>,
}

impl<const N: usize, const INPUT_SIZE: usize> CommandHistory<N, INPUT_SIZE> {
    /// Create new command history keeping at most `depth` lines.
    #[cfg(feature = "history")]
    pub fn new(depth: usize) -> Self {
        Self {
            entries: heapless::Vec::new(),
            depth: depth.min(N),
            index: 0,
        }
    }

    /// Create new command history (stub version).
    #[cfg(not(feature = "history"))]
    pub fn new(depth: usize) -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Add a submitted line.
    ///
    /// The oldest line is dropped when `depth` lines are already stored. A line that
    /// repeats the newest entry (compared case-insensitively over that entry's
    /// length) is not stored again. Either way the navigation index returns to the
    /// live line.
    #[cfg(feature = "history")]
    pub fn push(&mut self, line: &str) {
        if line.is_empty() || self.depth == 0 {
            return;
        }

        if let Some(last) = self.entries.last()
            && repeats(line, last)
        {
            self.reset_position();
            return;
        }

        let mut entry = heapless::String::new();
        if entry.push_str(line).is_ok() {
            if self.entries.len() >= self.depth {
                let dropped = self.entries.remove(0);
                log::trace!("history full, evicted '{}'", dropped);
            }
            let _ = self.entries.push(entry);
        }

        self.reset_position();
    }

    /// Add a submitted line (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn push(&mut self, _line: &str) {
        // No-op
    }

    /// Step back to the previous (older) line.
    ///
    /// Returns `None` once the oldest line has been reached; the caller treats that
    /// as a cancel.
    #[cfg(feature = "history")]
    pub fn previous_command(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).map(|e| e.as_str())
    }

    /// Step back (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn previous_command(&mut self) -> Option<&str> {
        None
    }

    /// Return the line at the navigation index and step forward.
    ///
    /// Returns `None` when already on the live line.
    #[cfg(feature = "history")]
    pub fn next_command(&mut self) -> Option<&str> {
        let entry = self.entries.get(self.index)?;
        self.index += 1;
        Some(entry.as_str())
    }

    /// Step forward (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn next_command(&mut self) -> Option<&str> {
        None
    }

    /// Move the navigation index back to the live line.
    #[cfg(feature = "history")]
    pub fn reset_position(&mut self) {
        self.index = self.entries.len();
    }

    /// Reset navigation position (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn reset_position(&mut self) {
        // No-op
    }

    /// Move the navigation index to `index`, clamped to the live line.
    #[cfg(feature = "history")]
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.entries.len());
    }

    /// Move the navigation index (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn seek(&mut self, index: usize) {
        // No-op
    }

    /// Current navigation index (equal to `len()` on the live line).
    #[cfg(feature = "history")]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Current navigation index (stub version - always 0).
    #[cfg(not(feature = "history"))]
    pub fn position(&self) -> usize {
        0
    }

    /// Stored lines, oldest first.
    #[cfg(feature = "history")]
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.as_str())
    }

    /// Stored lines (stub version - always empty).
    #[cfg(not(feature = "history"))]
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        core::iter::empty()
    }

    /// Stored lines labelled by offset from the live line (`-len..=-1`), followed by
    /// `live` labelled `0`.
    pub fn enumerate<'s>(&'s self, live: &'s str) -> impl Iterator<Item = (isize, &'s str)> {
        let len = self.len() as isize;
        self.entries()
            .enumerate()
            .map(move |(i, e)| (i as isize - len, e))
            .chain(core::iter::once((0, live)))
    }

    /// Number of stored lines.
    #[cfg(feature = "history")]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of stored lines (stub version - always 0).
    #[cfg(not(feature = "history"))]
    pub fn len(&self) -> usize {
        0
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// True if `line` repeats `last` over `last`'s length, ignoring case.
#[cfg(feature = "history")]
fn repeats(line: &str, last: &str) -> bool {
    line.as_bytes()
        .get(..last.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(last.as_bytes()))
}

impl<const N: usize, const INPUT_SIZE: usize> Default for CommandHistory<N, INPUT_SIZE> {
    fn default() -> Self {
        Self::new(N)
    }
}
