//! Shared library code for native platform demos
//!
//! Terminal setup and a non-blocking stdin/stdout port for the command processor.

pub mod io;

pub use io::{RawModeGuard, StdioByteIo};
