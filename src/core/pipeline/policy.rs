//! Hazard Resolution Policies.
//!
//! A policy is chosen once per run and decides, for every RAW hazard the
//! scheduler finds, how the hazard is neutralized:
//!
//! 1. **Stall:** insert one bubble right after the producer.
//! 2. **Forward:** when the consumer directly follows the producer, forward
//!    the result; one bubble is still needed for the adjacent pair.
//! 3. **Reorder:** move a later independent instruction into the slot after
//!    the producer instead of a bubble.
//! 4. **Best choice:** forward, else reorder, else stall.
//!
//! Every policy falls back to a stall, so every policy is total.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::ScheduleError;
use crate::core::pipeline::reorder;
use crate::isa::Instruction;

/// Conflict resolution policy.
///
/// The discriminants are the numeric selectors accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Always insert a bubble.
    Stall = 0,
    /// Fill the slot with a moved instruction when legal.
    Reorder = 1,
    /// Forward adjacent results, still inserting one bubble.
    Forward = 2,
    /// Forward, then reorder, then stall.
    #[default]
    BestChoice = 3,
}

impl Policy {
    /// All policies, in selector order.
    pub const ALL: [Policy; 4] = [
        Policy::Stall,
        Policy::Reorder,
        Policy::Forward,
        Policy::BestChoice,
    ];

    /// Returns the canonical policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Stall => "stall",
            Policy::Reorder => "reorder",
            Policy::Forward => "forward",
            Policy::BestChoice => "best",
        }
    }

    /// Decides how to resolve one RAW hazard.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The hazard and the scheduler state around it
    ///
    /// # Returns
    ///
    /// The action to apply. Never fails: every policy can fall back to a stall.
    pub fn decide(&self, ctx: &HazardContext<'_>) -> Action {
        match self {
            Policy::Stall => Action::Stall,
            Policy::Forward => {
                if can_forward(ctx) {
                    Action::Forward
                } else {
                    Action::Stall
                }
            }
            Policy::Reorder => match reorder::find_filler(ctx) {
                Some(moved) => Action::Reorder { moved },
                None => Action::Stall,
            },
            Policy::BestChoice => {
                if can_forward(ctx) {
                    Action::Forward
                } else if let Some(moved) = reorder::find_filler(ctx) {
                    Action::Reorder { moved }
                } else {
                    Action::Stall
                }
            }
        }
    }
}

impl TryFrom<u8> for Policy {
    type Error = ScheduleError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(Policy::Stall),
            1 => Ok(Policy::Reorder),
            2 => Ok(Policy::Forward),
            3 => Ok(Policy::BestChoice),
            _ => Err(ScheduleError::InvalidPolicy(selector.to_string())),
        }
    }
}

impl FromStr for Policy {
    type Err = ScheduleError;

    /// Parses a policy name or numeric selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "0" | "stall" | "bubble" => Ok(Policy::Stall),
            "1" | "reorder" => Ok(Policy::Reorder),
            "2" | "forward" | "forwarding" => Ok(Policy::Forward),
            "3" | "best" | "best-choice" | "best_choice" => Ok(Policy::BestChoice),
            _ => Err(ScheduleError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rewrite applied to one hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Action {
    /// One bubble inserted after the producer.
    Stall,
    /// Result forwarded to the adjacent consumer, one bubble inserted.
    Forward,
    /// The instruction at input position `moved` was placed after the producer.
    Reorder {
        /// Input position of the moved instruction.
        moved: usize,
    },
}

/// Record of one resolved hazard. Positions refer to the input schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Position of the instruction writing the register.
    pub producer: usize,
    /// Position of the nearest instruction reading it.
    pub consumer: usize,
    /// The rewrite that was applied.
    pub action: Action,
}

/// A detected RAW hazard together with the scheduler state a policy needs.
#[derive(Clone, Copy, Debug)]
pub struct HazardContext<'a> {
    /// The input instruction stream.
    pub program: &'a [Instruction],
    /// Position of the producer.
    pub producer: usize,
    /// Position of the nearest consumer.
    pub consumer: usize,
    /// `pending[k]` is `true` while input position `k` has not been emitted.
    pub pending: &'a [bool],
    /// Maximum distance from the producer a moved instruction may come from.
    pub reorder_window: usize,
}

impl HazardContext<'_> {
    /// Returns the next position after the producer still waiting to be emitted.
    pub fn next_pending(&self) -> Option<usize> {
        (self.producer + 1..self.program.len()).find(|&k| self.pending[k])
    }
}

/// Returns `true` if the consumer directly follows the producer.
///
/// Forwarding needs a direct producer-to-consumer path; with an instruction
/// in between, the hazard is left to the fallback.
pub fn can_forward(ctx: &HazardContext<'_>) -> bool {
    ctx.next_pending() == Some(ctx.consumer)
}
