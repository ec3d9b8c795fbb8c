//! MIPS instruction set definitions.
//!
//! This module contains the mnemonic table, the decoded instruction model,
//! the line decoder and the text renderer, plus the [`Schedule`] container
//! the scheduler operates on.

/// Source line tokenizer and decoder.
pub mod decode;

/// Assembly text rendering for instructions.
pub mod disasm;

/// Decoded instruction model and register usage.
pub mod instruction;

/// Mnemonic table and operand layouts.
pub mod opcodes;

/// Ordered instruction sequences.
pub mod schedule;

pub use decode::{decode_line, decode_line_with, tokenize, Decoded, Syntax};
pub use instruction::{ImmediateOp, ImmediateValue, Instruction, JumpOp, Label, RegisterOp};
pub use opcodes::{Form, ImmediateLayout, Opcode, RegisterLayout};
pub use schedule::Schedule;
