//! Integration tests for instruction decoding and rendering.

mod common;

use common::inst;
use mips_scheduler::common::{DecodeError, Register};
use mips_scheduler::isa::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn regs<'a>(it: impl Iterator<Item = &'a Register>) -> Vec<&'a str> {
    it.map(|r| r.name()).collect()
}

/// Tests that the tokenizer drops commas, parentheses and comments.
#[test]
fn test_tokenize_strips_punctuation_and_comments() {
    assert_eq!(
        tokenize("  lw $t0, 4($sp)   # reload"),
        vec!["lw", "$t0", "4", "$sp"]
    );
    assert!(tokenize("# only a comment").is_empty());
}

/// Tests mnemonic lookup is case-insensitive and rejects unknown names.
#[test]
fn test_opcode_lookup() {
    let add = Opcode::lookup("ADD").expect("add is in the table");
    assert_eq!(add.mnemonic(), "add");
    assert_eq!(add.form(), Form::Register(RegisterLayout::Arith));
    assert!(Opcode::lookup("frobnicate").is_none());
}

/// Tests register-format arithmetic decoding.
#[test]
fn test_decode_register_arith() {
    let i = inst("add $t0, $t1, $t2");
    assert_eq!(i.mnemonic(), "add");
    assert_eq!(i.writes().map(|r| r.name()), Some("$t0"));
    assert_eq!(regs(i.reads()), vec!["$t1", "$t2"]);
    assert!(!i.is_control_transfer());
}

/// Tests that a shift keeps its amount as an immediate, not a register.
#[test]
fn test_decode_shift_amount() {
    let i = inst("sll $t0, $t1, 4");
    match &i {
        Instruction::Register(r) => {
            assert_eq!(r.rt, None);
            assert_eq!(r.shamt.as_ref().map(|s| s.as_str()), Some("4"));
        }
        other => panic!("expected register format, got {:?}", other),
    }
    assert_eq!(regs(i.reads()), vec!["$t1"]);
}

/// Tests multiply and divide write no general-purpose register.
#[test]
fn test_decode_mult_has_no_destination() {
    let i = inst("mult $t0, $t1");
    assert_eq!(i.writes(), None);
    assert_eq!(regs(i.reads()), vec!["$t0", "$t1"]);
}

/// Tests load decoding with base-plus-offset addressing.
#[test]
fn test_decode_load() {
    let i = inst("lw $t0, 4($sp)");
    assert_eq!(i.writes().map(|r| r.name()), Some("$t0"));
    assert_eq!(regs(i.reads()), vec!["$sp"]);
}

/// Tests that a load without an offset gets a zero offset.
#[test]
fn test_decode_load_without_offset() {
    let i = inst("lw $t0, ($sp)");
    assert_eq!(i.to_string(), "lw $t0, $sp, 0");
}

/// Tests stores read both the base and the stored value.
#[test]
fn test_decode_store_reads_value() {
    let i = inst("sw $t0, 8($sp)");
    assert_eq!(i.writes(), None);
    assert_eq!(regs(i.reads()), vec!["$sp", "$t0"]);
}

/// Tests branches read both compared registers and are control transfers.
#[test]
fn test_decode_branch() {
    let i = inst("beq $t0, $t1, loop");
    assert_eq!(i.writes(), None);
    assert_eq!(regs(i.reads()), vec!["$t0", "$t1"]);
    assert!(i.is_control_transfer());
    assert!(!i.is_movable());
}

/// Tests `lui` reads only the zero register.
#[test]
fn test_decode_lui() {
    let i = inst("lui $t0, 0x1000");
    assert_eq!(i.writes().map(|r| r.name()), Some("$t0"));
    assert_eq!(regs(i.reads()), vec!["$zero"]);
}

/// Tests single-operand `jalr` links through `$ra`.
#[test]
fn test_decode_jalr_default_link() {
    let i = inst("jalr $t9");
    assert_eq!(i.writes().map(|r| r.name()), Some("$ra"));
    assert_eq!(regs(i.reads()), vec!["$t9"]);
    assert!(i.is_control_transfer());
}

/// Tests jumps carry a label and no registers.
#[test]
fn test_decode_jump() {
    let i = inst("j L1");
    assert_eq!(i.writes(), None);
    assert_eq!(i.reads().count(), 0);
    assert!(i.is_control_transfer());
}

/// Tests upper-case mnemonics decode to the canonical lower-case name.
#[test]
fn test_decode_uppercase_mnemonic() {
    assert_eq!(inst("ADD $t0, $t1, $t2").mnemonic(), "add");
}

/// Tests that a `nop` line decodes to a bubble.
#[test]
fn test_decode_nop() {
    assert_eq!(inst("nop"), Instruction::Nop);
    assert_eq!(Instruction::Nop.to_string(), "NOP");
}

/// Tests blank and comment-only lines produce nothing.
#[rstest]
#[case("")]
#[case("   ")]
#[case("# comment")]
fn test_decode_blank_line(#[case] line: &str) {
    assert_eq!(decode_line(1, line), Ok(None));
}

/// Tests an unknown mnemonic is a fatal error carrying its line number.
#[test]
fn test_decode_unknown_mnemonic() {
    assert_eq!(
        decode_line(2, "foo $t0, $t1"),
        Err(DecodeError::UnknownMnemonic {
            line: 2,
            mnemonic: "foo".to_string(),
        })
    );
}

/// Tests missing operands yield an inert instruction plus a diagnostic.
#[test]
fn test_decode_missing_operands_is_inert() {
    let decoded = decode_line(3, "add $t0, $t1  # oops")
        .expect("not fatal")
        .expect("not blank");
    assert_eq!(
        decoded.instruction,
        Instruction::Malformed("add $t0, $t1".to_string())
    );
    assert_eq!(
        decoded.diagnostic,
        Some(DecodeError::MalformedInstruction {
            line: 3,
            format: "register",
            text: "add $t0, $t1".to_string(),
        })
    );
    assert_eq!(decoded.instruction.writes(), None);
    assert_eq!(decoded.instruction.reads().count(), 0);
    assert!(!decoded.instruction.is_movable());
}

/// Tests a numeric literal in a register slot is rejected.
#[test]
fn test_decode_number_in_register_slot() {
    let err = "add $t0, $t1, 5".parse::<Instruction>().unwrap_err();
    assert!(matches!(err, DecodeError::MalformedInstruction { .. }));
}

/// Tests strict parsing of empty text.
#[test]
fn test_parse_empty_text() {
    assert_eq!(
        "".parse::<Instruction>(),
        Err(DecodeError::Empty { line: 1 })
    );
}

/// Tests rendering uses the fixed per-format templates.
#[rstest]
#[case("add $t0, $t1, $t2", "add $t0, $t1, $t2")]
#[case("sll $t0, $t1, 4", "sll $t0, $t1, 4")]
#[case("mult $t0, $t1", "mult $t0, $t1")]
#[case("mflo $t2", "mflo $t2")]
#[case("jr $ra", "jr $ra")]
#[case("jalr $t9", "jalr $ra, $t9")]
#[case("addi $t0, $t1, -4", "addi $t0, $t1, -4")]
#[case("lui $t0, 5", "lui $t0, $zero, 5")]
#[case("lw $t0, 4($sp)", "lw $t0, $sp, 4")]
#[case("sw $t2, 8($sp)", "sw $t2, $sp, 8")]
#[case("beq $t0, $t1, L", "beq $t1, $t0, L")]
#[case("bgtz $t0, done", "bgtz $t0, done")]
#[case("jal func", "jal func")]
fn test_render_template(#[case] source: &str, #[case] rendered: &str) {
    assert_eq!(inst(source).to_string(), rendered);
}

/// Tests rendered text decodes back to the same instruction as schedule text.
#[rstest]
#[case("lw $t0, 4($sp)")]
#[case("sw $t2, 8($sp)")]
#[case("lui $t0, 0x1000")]
#[case("beq $t0, $t1, loop")]
#[case("bltz $t3, done")]
#[case("jalr $t9")]
fn test_schedule_syntax_reads_rendered_text(#[case] source: &str) {
    let original = inst(source);
    let decoded = decode_line_with(1, &original.to_string(), Syntax::Schedule)
        .expect("known mnemonic")
        .expect("not blank");
    assert_eq!(decoded.diagnostic, None);
    assert_eq!(decoded.instruction, original);
}

/// Tests schedule text keeps the `rt, rs` order of branches.
#[test]
fn test_schedule_syntax_branch_order() {
    let decoded = decode_line_with(1, "bne $t1, $t0, L", Syntax::Schedule)
        .unwrap()
        .unwrap();
    assert_eq!(decoded.instruction, inst("bne $t0, $t1, L"));
}

/// Tests schedule text rejects a `lui` reading anything but `$zero`.
#[test]
fn test_schedule_syntax_lui_source() {
    let decoded = decode_line_with(4, "lui $t0, $t1, 5", Syntax::Schedule)
        .unwrap()
        .unwrap();
    assert_eq!(
        decoded.diagnostic,
        Some(DecodeError::MalformedInstruction {
            line: 4,
            format: "immediate",
            text: "lui $t0, $t1, 5".to_string(),
        })
    );
}

/// Tests a malformed line renders as its original text.
#[test]
fn test_render_malformed() {
    let i = Instruction::Malformed("add $t0".to_string());
    assert_eq!(i.to_string(), "add $t0");
    assert_eq!(i.mnemonic(), "add");
}

/// Tests the schedule container renders one instruction per line.
#[test]
fn test_schedule_display() {
    let schedule = common::program(&["add $t0, $t1, $t2", "nop", "j L1"]);
    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule.nop_count(), 1);
    assert_eq!(schedule.to_string(), "add $t0, $t1, $t2\nNOP\nj L1\n");
}
