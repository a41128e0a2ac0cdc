#![no_std]
#![no_main]

use core::fmt::Write;
use cmdproc::{Action, ByteIo, Command, Config, Processor, RunResult};
use panic_halt as _;

// Minimal ByteIo implementation - measures only struct size
pub struct MinimalIo;

impl ByteIo for MinimalIo {
    type Error = ();

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(None)
    }

    fn write_byte(&mut self, _byte: u8) -> Result<(), Self::Error> {
        Ok(())
    }
}

// Command implementation
fn status(_args: &str, out: &mut dyn Write) -> RunResult {
    let _ = out.write_str("OK\r\n");
    RunResult::Continue
}

static STATUS: Command = Command::new("status", "Show status", Action::Run(&status));

// Entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    let config = Config::interactive().max_command_len(64).history_depth(4);

    let Ok(mut processor) = Processor::<MinimalIo, 64, 4, 8>::new(MinimalIo, config) else {
        loop {
            cortex_m::asm::nop();
        }
    };
    let _ = processor.add(&STATUS);

    // Poll once and feed bytes so the editor and dispatch paths are included
    // Use black_box to prevent optimizer from removing the code
    let _ = core::hint::black_box(processor.run());
    for b in *b"st\t\r" {
        let _ = core::hint::black_box(processor.process_byte(b));
    }

    // Keep processor alive to prevent optimization
    loop {
        core::hint::black_box(&processor);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[cortex_m_rt::exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
