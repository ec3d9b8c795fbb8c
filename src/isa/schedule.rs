//! Instruction Schedules.
//!
//! A [`Schedule`] is an ordered instruction sequence. The scheduler consumes
//! one and produces another; it never edits instructions in place.

use std::fmt;
use std::ops::Index;

use crate::isa::instruction::Instruction;

/// Ordered sequence of instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    instructions: Vec<Instruction>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instructions, bubbles included.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the schedule holds no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Appends an instruction.
    pub fn push(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    /// Iterates over the instructions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Borrows the instructions as a slice.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of scheduler-inserted bubbles.
    pub fn nop_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_nop()).count()
    }
}

impl From<Vec<Instruction>> for Schedule {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl From<Schedule> for Vec<Instruction> {
    fn from(schedule: Schedule) -> Self {
        schedule.instructions
    }
}

impl FromIterator<Instruction> for Schedule {
    fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Schedule {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl Index<usize> for Schedule {
    type Output = Instruction;

    fn index(&self, idx: usize) -> &Instruction {
        &self.instructions[idx]
    }
}

impl fmt::Display for Schedule {
    /// Formats the schedule as assembly text, one instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            writeln!(f, "{}", inst)?;
        }
        Ok(())
    }
}
