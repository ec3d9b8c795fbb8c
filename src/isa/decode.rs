//! Source Line Decoder.
//!
//! Turns one line of MIPS assembly into an [`Instruction`]. Lines are split on
//! whitespace, commas and parentheses, so `lw $t0, 4($sp)` yields the tokens
//! `lw $t0 4 $sp`. The mnemonic selects the operand layout from
//! [`crate::isa::opcodes`]; the remaining tokens fill the layout's slots.
//!
//! A line whose operands do not fit its layout is not fatal: it decodes to
//! [`Instruction::Malformed`] together with a `MalformedInstruction`
//! diagnostic, and the scheduler treats it as inert.
//!
//! Two operand orders are understood. Assembler source writes `lw rt, imm(rs)`
//! and `beq rs, rt, label`; resolved schedules are written back with every
//! immediate form as `op rt, rs, imm` and are read with [`Syntax::Schedule`].

use std::str::FromStr;

use tracing::warn;

use crate::common::reg::ZERO;
use crate::common::{DecodeError, Register};
use crate::isa::instruction::{ImmediateOp, ImmediateValue, Instruction, JumpOp, Label, RegisterOp};
use crate::isa::opcodes::{Form, ImmediateLayout, Opcode, RegisterLayout};

/// Register written implicitly by single-operand `jalr`.
const LINK_REGISTER: &str = "$ra";

/// Bubble mnemonic, accepted so resolved schedules can be read back.
const NOP_MNEMONIC: &str = "nop";

/// Offset used for `lw rt, (rs)` style addressing.
const ZERO_OFFSET: &str = "0";

/// Operand order a line is written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Syntax {
    /// Assembler source: `lw rt, imm(rs)`, `lui rt, imm`, `beq rs, rt, label`.
    #[default]
    Assembly,
    /// Resolved schedule text: immediate forms as `op rt, rs, imm`.
    Schedule,
}

/// Result of decoding one non-blank source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded instruction, `Malformed` if the operands did not fit.
    pub instruction: Instruction,
    /// Non-fatal problem found while decoding, if any.
    pub diagnostic: Option<DecodeError>,
}

/// Splits a source line into tokens, dropping `#` comments.
///
/// # Arguments
///
/// * `line` - One line of assembly source
///
/// # Returns
///
/// The non-empty tokens in source order.
pub fn tokenize(line: &str) -> Vec<&str> {
    let code = line.split('#').next().unwrap_or("");
    code.split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Decodes one line of assembler source.
///
/// Shorthand for [`decode_line_with`] using [`Syntax::Assembly`].
pub fn decode_line(line_no: usize, line: &str) -> Result<Option<Decoded>, DecodeError> {
    decode_line_with(line_no, line, Syntax::Assembly)
}

/// Decodes one line written in the given operand order.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, used in diagnostics
/// * `line` - The raw source line
/// * `syntax` - Operand order of immediate-format instructions
///
/// # Returns
///
/// `Ok(None)` for blank and comment-only lines, `Ok(Some(_))` for an
/// instruction (possibly `Malformed`), or `Err(UnknownMnemonic)`.
pub fn decode_line_with(
    line_no: usize,
    line: &str,
    syntax: Syntax,
) -> Result<Option<Decoded>, DecodeError> {
    let tokens = tokenize(line);
    let Some((&mnemonic, operands)) = tokens.split_first() else {
        return Ok(None);
    };

    if mnemonic.eq_ignore_ascii_case(NOP_MNEMONIC) && operands.is_empty() {
        return Ok(Some(Decoded {
            instruction: Instruction::Nop,
            diagnostic: None,
        }));
    }

    let op = Opcode::lookup(mnemonic).ok_or_else(|| DecodeError::UnknownMnemonic {
        line: line_no,
        mnemonic: mnemonic.to_string(),
    })?;

    match decode_operands(op, operands, syntax) {
        Some(instruction) => Ok(Some(Decoded {
            instruction,
            diagnostic: None,
        })),
        None => {
            let text = line.split('#').next().unwrap_or("").trim().to_string();
            warn!(
                line = line_no,
                format = op.form().name(),
                "malformed instruction `{}`, treating it as inert",
                text
            );
            Ok(Some(Decoded {
                instruction: Instruction::Malformed(text.clone()),
                diagnostic: Some(DecodeError::MalformedInstruction {
                    line: line_no,
                    format: op.form().name(),
                    text,
                }),
            }))
        }
    }
}

/// Fills the operand slots of `op` from `operands`.
///
/// Returns `None` when the token count is outside the layout's range or a
/// numeric token sits in a register slot.
fn decode_operands(op: Opcode, operands: &[&str], syntax: Syntax) -> Option<Instruction> {
    let form = op.form();
    if let (Form::Immediate(layout), Syntax::Schedule) = (form, syntax) {
        let (rt, rs, immediate) = schedule_immediate(layout, operands)?;
        return Some(Instruction::Immediate(ImmediateOp {
            op,
            rt,
            rs,
            immediate: ImmediateValue::new(immediate),
        }));
    }
    if !form.operand_count().contains(&operands.len()) {
        return None;
    }

    let instruction = match form {
        Form::Register(layout) => {
            let mut inst = RegisterOp {
                op,
                rd: None,
                rs: None,
                rt: None,
                shamt: None,
            };
            match layout {
                RegisterLayout::Arith => {
                    inst.rd = Some(register(operands[0])?);
                    inst.rs = Some(register(operands[1])?);
                    inst.rt = Some(register(operands[2])?);
                }
                RegisterLayout::Shift => {
                    if !is_numeric(operands[2]) {
                        return None;
                    }
                    inst.rd = Some(register(operands[0])?);
                    inst.rs = Some(register(operands[1])?);
                    inst.shamt = Some(ImmediateValue::new(operands[2]));
                }
                RegisterLayout::MulDiv => {
                    inst.rs = Some(register(operands[0])?);
                    inst.rt = Some(register(operands[1])?);
                }
                RegisterLayout::MoveFrom => {
                    inst.rd = Some(register(operands[0])?);
                }
                RegisterLayout::MoveTo | RegisterLayout::JumpRegister => {
                    inst.rs = Some(register(operands[0])?);
                }
                RegisterLayout::JumpLinkRegister => match operands {
                    [rs] => {
                        inst.rd = Some(Register::new(LINK_REGISTER));
                        inst.rs = Some(register(rs)?);
                    }
                    [rd, rs] => {
                        inst.rd = Some(register(rd)?);
                        inst.rs = Some(register(rs)?);
                    }
                    _ => return None,
                },
            }
            Instruction::Register(inst)
        }
        Form::Immediate(layout) => {
            let (rt, rs, immediate) = match layout {
                ImmediateLayout::Arith => (
                    Some(register(operands[0])?),
                    register(operands[1])?,
                    operands[2],
                ),
                ImmediateLayout::Upper => (Some(register(operands[0])?), Register::zero(), operands[1]),
                ImmediateLayout::Load | ImmediateLayout::Store => match operands {
                    [rt, rs] => (Some(register(rt)?), register(rs)?, ZERO_OFFSET),
                    [rt, offset, rs] => (Some(register(rt)?), register(rs)?, *offset),
                    _ => return None,
                },
                ImmediateLayout::Branch => (
                    Some(register(operands[1])?),
                    register(operands[0])?,
                    operands[2],
                ),
                ImmediateLayout::BranchZero => (None, register(operands[0])?, operands[1]),
            };
            Instruction::Immediate(ImmediateOp {
                op,
                rt,
                rs,
                immediate: ImmediateValue::new(immediate),
            })
        }
        Form::Jump => Instruction::Jump(JumpOp {
            op,
            target: Label::new(operands[0]),
        }),
    };
    Some(instruction)
}

/// Fills an immediate-format layout from `rt, rs, imm` ordered tokens.
///
/// Compare-with-zero branches have no `rt` and are written `op rs, imm`; `lui`
/// must name `$zero` as its source.
fn schedule_immediate<'a>(
    layout: ImmediateLayout,
    operands: &[&'a str],
) -> Option<(Option<Register>, Register, &'a str)> {
    match (layout, operands) {
        (ImmediateLayout::BranchZero, [rs, imm]) => Some((None, register(rs)?, *imm)),
        (ImmediateLayout::BranchZero, _) => None,
        (ImmediateLayout::Upper, [_, rs, _]) if *rs != ZERO => None,
        (_, [rt, rs, imm]) => Some((Some(register(rt)?), register(rs)?, *imm)),
        _ => None,
    }
}

/// Accepts a token as a register unless it is a numeric literal.
fn register(token: &str) -> Option<Register> {
    if is_numeric(token) {
        None
    } else {
        Some(Register::new(token))
    }
}

/// Returns `true` for decimal or `0x` hexadecimal integer literals.
fn is_numeric(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
    }
}

impl FromStr for Instruction {
    type Err = DecodeError;

    /// Decodes a single line strictly: malformed operands are an error here
    /// rather than an inert placeholder.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = decode_line(1, s)?.ok_or(DecodeError::Empty { line: 1 })?;
        match decoded.diagnostic {
            Some(err) => Err(err),
            None => Ok(decoded.instruction),
        }
    }
}
