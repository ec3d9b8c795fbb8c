//! Instruction Rendering.
//!
//! Formats instructions back to text, one fixed template per variant:
//!
//! * `RegisterOp` → `op rd, rs, rt` (absent operands omitted, `shamt` in the `rt` slot)
//! * `ImmediateOp` → `op rt, rs, imm` for every immediate form, so loads print
//!   `lw $t0, $sp, 4` and `lui` prints its implicit `$zero`; compare-with-zero
//!   branches have no `rt` and print `op rs, imm`
//! * `JumpOp` → `op target`
//! * `NoOp` → `NOP`
//!
//! The output decodes back to the same instruction with
//! [`crate::isa::decode::Syntax::Schedule`].

use std::fmt;

use crate::isa::instruction::{ImmediateOp, Instruction, RegisterOp};

fn write_operands(f: &mut fmt::Formatter<'_>, mnemonic: &str, operands: &[&str]) -> fmt::Result {
    write!(f, "{}", mnemonic)?;
    for (idx, operand) in operands.iter().enumerate() {
        let sep = if idx == 0 { " " } else { ", " };
        write!(f, "{}{}", sep, operand)?;
    }
    Ok(())
}

impl fmt::Display for RegisterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let third = self
            .rt
            .as_ref()
            .map(|r| r.name())
            .or_else(|| self.shamt.as_ref().map(|s| s.as_str()));
        let operands: Vec<&str> = [
            self.rd.as_ref().map(|r| r.name()),
            self.rs.as_ref().map(|r| r.name()),
            third,
        ]
        .into_iter()
        .flatten()
        .collect();
        write_operands(f, self.op.mnemonic(), &operands)
    }
}

impl fmt::Display for ImmediateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands: Vec<&str> = [
            self.rt.as_ref().map(|r| r.name()),
            Some(self.rs.name()),
            Some(self.immediate.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect();
        write_operands(f, self.op.mnemonic(), &operands)
    }
}

impl fmt::Display for Instruction {
    /// Formats the instruction as one line of assembly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Register(r) => write!(f, "{}", r),
            Instruction::Immediate(i) => write!(f, "{}", i),
            Instruction::Jump(j) => write!(f, "{} {}", j.op.mnemonic(), j.target.as_str()),
            Instruction::Nop => f.write_str("NOP"),
            Instruction::Malformed(text) => f.write_str(text),
        }
    }
}
