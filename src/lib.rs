//! # cmdproc
//!
//! Line-oriented command interpreter for embedded serial consoles, with zero heap
//! allocation.
//!
//! **Key features:**
//! - **Polled** - `Processor::run` handles at most one byte and never waits
//! - **Prefix matching** - commands may be abbreviated, and the line is rewritten to
//!   the full name before it runs
//! - **Keystroke validation** - the live line always starts a registered command
//! - **Optional features** - tab completion, command history
//! - **Flexible I/O** - platform-agnostic byte I/O trait
//!
//! ## Optional Features
//!
//! - `completion` - Tab completes a uniquely matched command name
//! - `history` - Submitted lines recalled with up/down arrows
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod io;
pub mod registry;
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::ByteIo;

// Configuration
pub use config::{Config, MIN_COMMAND_LEN};

// Error types
pub use error::CliError;

// Commands
pub use registry::{Action, Command, CommandHandler, Registry, RunResult};

// Processor
pub use shell::{CommandHistory, InputDecoder, InputEvent, LineBuffer, Processor};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
