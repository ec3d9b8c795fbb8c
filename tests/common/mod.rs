//! Shared helpers for the scheduler integration tests.

#![allow(dead_code)]

use mips_scheduler::{Instruction, Schedule};

/// Decodes one assembly line, panicking on anything but a clean decode.
pub fn inst(line: &str) -> Instruction {
    line.parse()
        .unwrap_or_else(|e| panic!("`{}` failed to decode: {}", line, e))
}

/// Builds a schedule from assembly lines.
pub fn program(lines: &[&str]) -> Schedule {
    lines.iter().map(|line| inst(line)).collect()
}

/// Renders a schedule back to one string per instruction.
pub fn render(schedule: &Schedule) -> Vec<String> {
    schedule.iter().map(|i| i.to_string()).collect()
}

/// Returns the schedule with every bubble removed.
pub fn without_nops(schedule: &Schedule) -> Vec<Instruction> {
    schedule.iter().filter(|i| !i.is_nop()).cloned().collect()
}
