//! MIPS Mnemonic Table.
//!
//! Maps every supported mnemonic to its instruction format and operand
//! layout. The layout drives both decoding (how many tokens a line needs and
//! which slot each token fills) and hazard analysis (whether an immediate-form
//! `rt` is read or written).

use std::ops::RangeInclusive;

/// Operand layouts of register-format (R-type) instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterLayout {
    /// `op rd, rs, rt` (ALU operations and variable shifts).
    Arith,
    /// `op rd, rs, shamt` (shift by immediate).
    Shift,
    /// `op rs, rt` (multiply/divide into HI/LO, no `rd`).
    MulDiv,
    /// `op rd` (move from HI/LO).
    MoveFrom,
    /// `op rs` (move to HI/LO).
    MoveTo,
    /// `op rs` (jump register).
    JumpRegister,
    /// `op rd, rs` (jump and link register).
    JumpLinkRegister,
}

/// Operand layouts of immediate-format (I-type) instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImmediateLayout {
    /// `op rt, rs, imm`, writes `rt`.
    Arith,
    /// `op rt, imm`, writes `rt`; `rs` is the zero register.
    Upper,
    /// `op rt, imm(rs)`, writes `rt`.
    Load,
    /// `op rt, imm(rs)`, reads `rt`.
    Store,
    /// `op rs, rt, label`, reads both.
    Branch,
    /// `op rs, label`, compares `rs` against zero.
    BranchZero,
}

/// Instruction format selected by a mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    /// Register-register format.
    Register(RegisterLayout),
    /// Register-immediate format.
    Immediate(ImmediateLayout),
    /// Jump format (`op target`).
    Jump,
}

impl Form {
    /// Returns the format name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Form::Register(_) => "register",
            Form::Immediate(_) => "immediate",
            Form::Jump => "jump",
        }
    }

    /// Returns the accepted number of operand tokens (excluding the mnemonic).
    ///
    /// Loads and stores accept `rt, (rs)` without an offset; `jalr` accepts a
    /// single operand and links through `$ra`.
    pub fn operand_count(&self) -> RangeInclusive<usize> {
        match self {
            Form::Register(RegisterLayout::Arith | RegisterLayout::Shift) => 3..=3,
            Form::Register(RegisterLayout::MulDiv) => 2..=2,
            Form::Register(RegisterLayout::JumpLinkRegister) => 1..=2,
            Form::Register(_) => 1..=1,
            Form::Immediate(ImmediateLayout::Arith | ImmediateLayout::Branch) => 3..=3,
            Form::Immediate(ImmediateLayout::Load | ImmediateLayout::Store) => 2..=3,
            Form::Immediate(_) => 2..=2,
            Form::Jump => 1..=1,
        }
    }
}

/// A mnemonic together with its format.
///
/// Only obtainable through [`Opcode::lookup`], so an opcode always agrees
/// with the table below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    mnemonic: &'static str,
    form: Form,
}

const fn r(mnemonic: &'static str, layout: RegisterLayout) -> Opcode {
    Opcode {
        mnemonic,
        form: Form::Register(layout),
    }
}

const fn i(mnemonic: &'static str, layout: ImmediateLayout) -> Opcode {
    Opcode {
        mnemonic,
        form: Form::Immediate(layout),
    }
}

const fn j(mnemonic: &'static str) -> Opcode {
    Opcode {
        mnemonic,
        form: Form::Jump,
    }
}

/// Supported MIPS I integer instructions.
pub const OPCODES: &[Opcode] = &[
    r("add", RegisterLayout::Arith),
    r("addu", RegisterLayout::Arith),
    r("sub", RegisterLayout::Arith),
    r("subu", RegisterLayout::Arith),
    r("and", RegisterLayout::Arith),
    r("or", RegisterLayout::Arith),
    r("xor", RegisterLayout::Arith),
    r("nor", RegisterLayout::Arith),
    r("slt", RegisterLayout::Arith),
    r("sltu", RegisterLayout::Arith),
    r("sllv", RegisterLayout::Arith),
    r("srlv", RegisterLayout::Arith),
    r("srav", RegisterLayout::Arith),
    r("sll", RegisterLayout::Shift),
    r("srl", RegisterLayout::Shift),
    r("sra", RegisterLayout::Shift),
    r("mult", RegisterLayout::MulDiv),
    r("multu", RegisterLayout::MulDiv),
    r("div", RegisterLayout::MulDiv),
    r("divu", RegisterLayout::MulDiv),
    r("mfhi", RegisterLayout::MoveFrom),
    r("mflo", RegisterLayout::MoveFrom),
    r("mthi", RegisterLayout::MoveTo),
    r("mtlo", RegisterLayout::MoveTo),
    r("jr", RegisterLayout::JumpRegister),
    r("jalr", RegisterLayout::JumpLinkRegister),
    i("addi", ImmediateLayout::Arith),
    i("addiu", ImmediateLayout::Arith),
    i("slti", ImmediateLayout::Arith),
    i("sltiu", ImmediateLayout::Arith),
    i("andi", ImmediateLayout::Arith),
    i("ori", ImmediateLayout::Arith),
    i("xori", ImmediateLayout::Arith),
    i("lui", ImmediateLayout::Upper),
    i("lb", ImmediateLayout::Load),
    i("lh", ImmediateLayout::Load),
    i("lw", ImmediateLayout::Load),
    i("lbu", ImmediateLayout::Load),
    i("lhu", ImmediateLayout::Load),
    i("lwl", ImmediateLayout::Load),
    i("lwr", ImmediateLayout::Load),
    i("sb", ImmediateLayout::Store),
    i("sh", ImmediateLayout::Store),
    i("sw", ImmediateLayout::Store),
    i("swl", ImmediateLayout::Store),
    i("swr", ImmediateLayout::Store),
    i("beq", ImmediateLayout::Branch),
    i("bne", ImmediateLayout::Branch),
    i("blez", ImmediateLayout::BranchZero),
    i("bgtz", ImmediateLayout::BranchZero),
    i("bltz", ImmediateLayout::BranchZero),
    i("bgez", ImmediateLayout::BranchZero),
    i("bltzal", ImmediateLayout::BranchZero),
    i("bgezal", ImmediateLayout::BranchZero),
    j("j"),
    j("jal"),
];

impl Opcode {
    /// Looks up a mnemonic in the table (case-insensitive).
    ///
    /// # Arguments
    ///
    /// * `mnemonic` - The first token of a source line
    ///
    /// # Returns
    ///
    /// The matching `Opcode`, or `None` for unsupported mnemonics.
    pub fn lookup(mnemonic: &str) -> Option<Opcode> {
        OPCODES
            .iter()
            .find(|op| op.mnemonic.eq_ignore_ascii_case(mnemonic))
            .copied()
    }

    /// Returns the canonical (lower-case) mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Returns the instruction format.
    pub fn form(&self) -> Form {
        self.form
    }

    /// Returns `true` for jumps, branches and jump-register instructions.
    ///
    /// Control transfers end a basic block, so the scheduler never moves an
    /// instruction across one.
    pub fn is_control_transfer(&self) -> bool {
        matches!(
            self.form,
            Form::Jump
                | Form::Immediate(ImmediateLayout::Branch | ImmediateLayout::BranchZero)
                | Form::Register(RegisterLayout::JumpRegister | RegisterLayout::JumpLinkRegister)
        )
    }
}
