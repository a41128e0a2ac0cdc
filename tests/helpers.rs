//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

use cmdproc::{Command, Config, RunResult};
pub use fixtures::{MockIo, TestProcessor};

/// Up arrow as sent by a VT100 terminal.
pub const UP: &[u8] = b"\x1b[A";

/// Down arrow as sent by a VT100 terminal.
pub const DOWN: &[u8] = b"\x1b[B";

/// One visual erase.
pub const ERASE: &str = "\x08 \x08";

/// Alert byte.
pub const BELL: u8 = 0x07;

// ============================================================================
// Processor Creation Helpers
// ============================================================================

/// Create a processor with `commands` added, ready for testing.
pub fn create_processor(config: Config<'static>, commands: &[&'static Command<'static>]) -> TestProcessor {
    let mut processor = TestProcessor::new(MockIo::new(), config).unwrap();
    for command in commands {
        processor.add(command).unwrap();
    }
    processor
}

/// Interactive processor with `commands` added, past its first prompt.
pub fn create_interactive(commands: &[&'static Command<'static>]) -> TestProcessor {
    let mut processor = create_processor(fixtures::interactive_config(), commands);
    processor.run().unwrap();
    processor.io_mut().clear_output();
    processor
}

// ============================================================================
// Input Helpers
// ============================================================================

/// Feed bytes straight to the editor, returning the last signal.
pub fn type_bytes(processor: &mut TestProcessor, bytes: &[u8]) -> RunResult {
    let mut last = RunResult::Continue;
    for &b in bytes {
        last = processor.process_byte(b).unwrap();
    }
    last
}

/// Type input without executing (no trailing newline).
pub fn type_input(processor: &mut TestProcessor, input: &str) {
    type_bytes(processor, input.as_bytes());
}

/// Press enter.
pub fn press_enter(processor: &mut TestProcessor) -> RunResult {
    processor.process_byte(b'\r').unwrap()
}

/// Press tab.
pub fn press_tab(processor: &mut TestProcessor) {
    processor.process_byte(b'\t').unwrap();
}

/// Press escape.
pub fn press_escape(processor: &mut TestProcessor) {
    processor.process_byte(0x1B).unwrap();
}

/// Press backspace `n` times.
pub fn press_backspace_n(processor: &mut TestProcessor, n: usize) {
    for _ in 0..n {
        processor.process_byte(0x08).unwrap();
    }
}

/// Press the up arrow.
pub fn press_up(processor: &mut TestProcessor) {
    type_bytes(processor, UP);
}

/// Press the down arrow.
pub fn press_down(processor: &mut TestProcessor) {
    type_bytes(processor, DOWN);
}

// ============================================================================
// Command Execution Helpers
// ============================================================================

/// Type `line`, press enter and return the output it produced.
pub fn execute_command(processor: &mut TestProcessor, line: &str) -> String {
    processor.io_mut().clear_output();
    type_input(processor, line);
    press_enter(processor);
    processor.io().output()
}

/// Poll until the input queue is drained or a command asks to exit.
pub fn run_until_idle(processor: &mut TestProcessor) -> RunResult {
    loop {
        let result = processor.run().unwrap();
        if result == RunResult::Exit || processor.io().input_empty() {
            return result;
        }
    }
}

/// Stored history lines, oldest first.
pub fn history_entries(processor: &TestProcessor) -> Vec<String> {
    processor.history().entries().map(String::from).collect()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that output contains all expected strings.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for exp in expected {
        assert!(
            output.contains(exp),
            "Expected '{}' in output, got: {:?}",
            exp,
            output
        );
    }
}

/// Assert that output does NOT contain any of the strings.
pub fn assert_contains_none(output: &str, forbidden: &[&str]) {
    for forbid in forbidden {
        assert!(
            !output.contains(forbid),
            "Did not expect '{}' in output, got: {:?}",
            forbid,
            output
        );
    }
}

/// Assert that the last output byte is the alert.
pub fn assert_bell(processor: &TestProcessor) {
    assert_eq!(
        processor.io().output_bytes().last(),
        Some(&BELL),
        "Expected bell, got: {:?}",
        processor.io().output()
    );
}
