//! Error types for command processor operations.
//!
//! The `CliError` enum covers storage exhaustion during setup and the two kinds of
//! user input error reported when a line is submitted.

use core::fmt;

/// Command processor error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Backing storage for the line buffer, history or registry is exhausted
    AllocationFailure,

    /// Submitted line matches no registered command
    CommandNotFound,

    /// Submitted line matches more than one registered command
    AmbiguousCommand {
        /// Number of commands the typed keyword matched
        matches: usize,
    },
}

impl CliError {
    /// Line written to the port when this error ends a submitted command.
    pub fn user_message(&self) -> &'static str {
        match self {
            CliError::AllocationFailure => " *** out of memory ***",
            CliError::CommandNotFound => " *** huh?                            try 'Help' ***",
            CliError::AmbiguousCommand { .. } => {
                " *** non-unique command ignored      try 'Help' ***"
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::AllocationFailure => write!(f, "Allocation failure"),
            CliError::CommandNotFound => write!(f, "Command not found"),
            CliError::AmbiguousCommand { matches } => {
                write!(f, "Ambiguous command ({} matches)", matches)
            }
        }
    }
}

impl core::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", CliError::AllocationFailure),
            "Allocation failure"
        );
        assert_eq!(
            format!("{}", CliError::CommandNotFound),
            "Command not found"
        );
        assert_eq!(
            format!("{}", CliError::AmbiguousCommand { matches: 2 }),
            "Ambiguous command (2 matches)"
        );
    }

    #[test]
    fn test_user_messages() {
        assert!(CliError::CommandNotFound.user_message().contains("huh?"));
        assert!(
            CliError::AmbiguousCommand { matches: 3 }
                .user_message()
                .contains("non-unique")
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CliError::CommandNotFound, CliError::CommandNotFound);
        assert_ne!(
            CliError::AmbiguousCommand { matches: 2 },
            CliError::AmbiguousCommand { matches: 3 }
        );
    }
}
