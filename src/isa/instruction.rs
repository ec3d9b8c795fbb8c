//! Decoded Instruction Model.
//!
//! An [`Instruction`] is an immutable value: the decoder builds it once and
//! the scheduler only ever copies, moves or inserts whole instructions. The
//! model exposes exactly what hazard analysis needs, namely the registers an
//! instruction reads and the register it writes.

use crate::common::Register;
use crate::isa::opcodes::{Form, ImmediateLayout, Opcode};

/// An immediate operand, carried through as written and never evaluated.
///
/// Branch offsets may be labels, so this is text rather than a number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImmediateValue(String);

impl ImmediateValue {
    /// Creates an immediate from its source spelling.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    /// Returns the immediate text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A jump target as written in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Creates a label from its source spelling.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_string())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Register-format instruction (`add`, `sll`, `mult`, `jr`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterOp {
    /// Opcode, always of [`Form::Register`].
    pub op: Opcode,
    /// Destination register.
    pub rd: Option<Register>,
    /// First source register.
    pub rs: Option<Register>,
    /// Second source register.
    pub rt: Option<Register>,
    /// Shift amount of shift-by-immediate forms.
    pub shamt: Option<ImmediateValue>,
}

/// Immediate-format instruction (`addi`, `lw`, `sw`, `beq`, ...).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImmediateOp {
    /// Opcode, always of [`Form::Immediate`].
    pub op: Opcode,
    /// Written by arithmetic, `lui` and load forms; read by store and branch forms.
    pub rt: Option<Register>,
    /// Base or source register, always read.
    pub rs: Register,
    /// Immediate, offset or branch label.
    pub immediate: ImmediateValue,
}

/// Jump-format instruction (`j`, `jal`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpOp {
    /// Opcode, always [`Form::Jump`].
    pub op: Opcode,
    /// Jump target.
    pub target: Label,
}

/// One decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register-register instruction.
    Register(RegisterOp),
    /// Register-immediate instruction.
    Immediate(ImmediateOp),
    /// Unconditional jump.
    Jump(JumpOp),
    /// Pipeline bubble inserted by the scheduler.
    Nop,
    /// Source line that did not satisfy its format; carries the original text.
    ///
    /// Reads and writes nothing, so it never takes part in a hazard.
    Malformed(String),
}

impl Instruction {
    /// Returns the mnemonic, `NOP` for bubbles and the first word of a malformed line.
    pub fn mnemonic(&self) -> &str {
        match self {
            Instruction::Register(r) => r.op.mnemonic(),
            Instruction::Immediate(i) => i.op.mnemonic(),
            Instruction::Jump(j) => j.op.mnemonic(),
            Instruction::Nop => "NOP",
            Instruction::Malformed(text) => text.split_whitespace().next().unwrap_or(""),
        }
    }

    /// Returns the register this instruction writes, if any.
    pub fn writes(&self) -> Option<&Register> {
        match self {
            Instruction::Register(r) => r.rd.as_ref(),
            Instruction::Immediate(i) => match i.op.form() {
                Form::Immediate(
                    ImmediateLayout::Arith | ImmediateLayout::Upper | ImmediateLayout::Load,
                ) => i.rt.as_ref(),
                _ => None,
            },
            Instruction::Jump(_) | Instruction::Nop | Instruction::Malformed(_) => None,
        }
    }

    /// Returns the registers this instruction reads, in operand order.
    pub fn reads(&self) -> impl Iterator<Item = &Register> + '_ {
        let sources: [Option<&Register>; 2] = match self {
            Instruction::Register(r) => [r.rs.as_ref(), r.rt.as_ref()],
            Instruction::Immediate(i) => match i.op.form() {
                Form::Immediate(
                    ImmediateLayout::Store | ImmediateLayout::Branch | ImmediateLayout::BranchZero,
                ) => [Some(&i.rs), i.rt.as_ref()],
                _ => [Some(&i.rs), None],
            },
            Instruction::Jump(_) | Instruction::Nop | Instruction::Malformed(_) => [None, None],
        };
        sources.into_iter().flatten()
    }

    /// Returns `true` if `reg` is one of this instruction's sources.
    pub fn reads_register(&self, reg: &Register) -> bool {
        self.reads().any(|r| r == reg)
    }

    /// Returns `true` for scheduler-inserted bubbles.
    pub fn is_nop(&self) -> bool {
        matches!(self, Instruction::Nop)
    }

    /// Returns `true` for jumps, branches and jump-register instructions.
    pub fn is_control_transfer(&self) -> bool {
        match self {
            Instruction::Register(r) => r.op.is_control_transfer(),
            Instruction::Immediate(i) => i.op.is_control_transfer(),
            Instruction::Jump(_) => true,
            Instruction::Nop | Instruction::Malformed(_) => false,
        }
    }

    /// Returns `true` if the reorder pass may move or cross this instruction.
    ///
    /// Bubbles, malformed lines and control transfers are fixed in place.
    pub fn is_movable(&self) -> bool {
        !matches!(self, Instruction::Nop | Instruction::Malformed(_)) && !self.is_control_transfer()
    }
}
