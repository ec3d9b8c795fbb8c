//! Data Hazard Detection.
//!
//! This module classifies the register dependencies between two instructions
//! in program order. Read-After-Write (RAW) dependencies are the hazards the
//! scheduler resolves; Write-After-Read (WAR) and Write-After-Write (WAW)
//! dependencies only restrict which instructions may be reordered.
//!
//! All checks are pure. Absent registers never match, and bubbles, jumps and
//! malformed instructions have no registers, so they take part in no hazard.

use crate::isa::Instruction;

/// Dependency classes holding between an earlier and a later instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hazards {
    /// The later instruction reads a register the earlier one writes.
    pub raw: bool,
    /// The later instruction writes a register the earlier one reads.
    pub war: bool,
    /// Both instructions write the same register.
    pub waw: bool,
}

impl Hazards {
    /// Returns `true` if any dependency class holds.
    pub fn any(&self) -> bool {
        self.raw || self.war || self.waw
    }
}

/// Checks for a Read-After-Write dependency.
///
/// # Arguments
///
/// * `earlier` - The instruction first in program order
/// * `later` - The instruction second in program order
///
/// # Returns
///
/// `true` if `earlier` writes a register that `later` reads.
pub fn has_raw(earlier: &Instruction, later: &Instruction) -> bool {
    earlier
        .writes()
        .is_some_and(|dest| later.reads_register(dest))
}

/// Checks for a Write-After-Read dependency.
///
/// # Arguments
///
/// * `earlier` - The instruction first in program order
/// * `later` - The instruction second in program order
///
/// # Returns
///
/// `true` if `later` writes a register that `earlier` reads.
pub fn has_war(earlier: &Instruction, later: &Instruction) -> bool {
    later
        .writes()
        .is_some_and(|dest| earlier.reads_register(dest))
}

/// Checks for a Write-After-Write dependency.
///
/// # Returns
///
/// `true` if both instructions write the same register.
pub fn has_waw(earlier: &Instruction, later: &Instruction) -> bool {
    match (earlier.writes(), later.writes()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Classifies every dependency between two instructions.
///
/// # Arguments
///
/// * `earlier` - The instruction first in program order
/// * `later` - The instruction second in program order
pub fn classify(earlier: &Instruction, later: &Instruction) -> Hazards {
    Hazards {
        raw: has_raw(earlier, later),
        war: has_war(earlier, later),
        waw: has_waw(earlier, later),
    }
}

/// Returns `true` if the two instructions may swap places.
///
/// Checks RAW in both directions as well as WAR and WAW, so the result does
/// not depend on argument order.
pub fn independent(a: &Instruction, b: &Instruction) -> bool {
    !classify(a, b).any() && !classify(b, a).any()
}

/// Finds the first RAW consumer of the instruction at `producer`.
///
/// Scans left to right from `producer + 1`, skipping positions for which
/// `skip` returns `true`. The scan stops at the first bubble: a `NOP` already
/// separates the producer from everything after it.
///
/// # Arguments
///
/// * `program` - The instruction stream
/// * `producer` - Index of the producing instruction
/// * `skip` - Positions that are no longer in the stream (already moved)
///
/// # Returns
///
/// The index of the nearest consumer, or `None` if there is no hazard.
pub fn find_raw_consumer<F>(program: &[Instruction], producer: usize, skip: F) -> Option<usize>
where
    F: Fn(usize) -> bool,
{
    let inst = program.get(producer)?;
    inst.writes()?;

    for (idx, candidate) in program.iter().enumerate().skip(producer + 1) {
        if skip(idx) {
            continue;
        }
        if candidate.is_nop() {
            return None;
        }
        if has_raw(inst, candidate) {
            return Some(idx);
        }
    }
    None
}
