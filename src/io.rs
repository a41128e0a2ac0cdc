//! Byte I/O abstraction for the command processor's transport.
//!
//! The `ByteIo` trait provides non-blocking byte-level I/O that can be implemented
//! for any transport (UART, Bluetooth serial bridge, USB CDC, stdio, ...).

use core::fmt;

/// Platform-agnostic byte I/O trait.
///
/// Output must not block indefinitely. Implementations may buffer internally and
/// flush after each [`Processor::run`](crate::Processor::run) call.
pub trait ByteIo {
    /// Platform-specific error type
    type Error;

    /// Non-blocking byte read.
    ///
    /// Returns:
    /// - `Ok(Some(byte))` if a byte is available
    /// - `Ok(None)` if nothing is pending
    /// - `Err(Self::Error)` on I/O error
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Write a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write a string.
    ///
    /// Default implementation uses `write_byte()` repeatedly.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for b in s.bytes() {
            self.write_byte(b)?;
        }
        Ok(())
    }

    /// Write a string followed by a line terminator.
    fn write_line(&mut self, s: &str) -> Result<(), Self::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }
}

/// `core::fmt::Write` adapter over a [`ByteIo`].
///
/// Command callbacks only see `fmt::Write`; the first port error is kept here so the
/// processor can hand it back to the caller once the callback returns.
pub(crate) struct PortWriter<'p, IO: ByteIo> {
    io: &'p mut IO,
    error: Option<IO::Error>,
}

impl<'p, IO: ByteIo> PortWriter<'p, IO> {
    pub(crate) fn new(io: &'p mut IO) -> Self {
        Self { io, error: None }
    }

    /// Consume the adapter, returning the first error seen.
    pub(crate) fn finish(self) -> Result<(), IO::Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<IO: ByteIo> fmt::Write for PortWriter<'_, IO> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.error.is_some() {
            return Err(fmt::Error);
        }
        self.io.write_str(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
