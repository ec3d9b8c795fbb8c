//! Hazard Resolving Scheduler.
//!
//! The scheduler makes one left-to-right pass over the input:
//!
//! 1. **Emit:** the instruction under the cursor is appended to the output.
//! 2. **Detect:** the nearest later instruction reading its result is located
//!    (first match only, stopping at an existing bubble).
//! 3. **Resolve:** the policy picks an action; a bubble or a moved filler is
//!    appended right after the producer.
//! 4. **Advance:** the cursor moves on, skipping positions already emitted by
//!    a reorder.
//!
//! The pass is deterministic, never deletes an instruction and never edits
//! one: the output only adds `NOP`s or changes positions.

use tracing::{debug, info};

use crate::common::ScheduleError;
use crate::core::pipeline::hazards::find_raw_consumer;
use crate::core::pipeline::policy::{Action, HazardContext, Policy, Resolution};
use crate::isa::{Instruction, Schedule};
use crate::stats::ScheduleStats;

/// Default maximum distance a reordered instruction may travel.
pub const DEFAULT_REORDER_WINDOW: usize = 8;

/// Result of one scheduling run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleOutcome {
    /// The hazard-free schedule.
    pub schedule: Schedule,
    /// Every hazard resolved, in the order it was found.
    pub resolutions: Vec<Resolution>,
    /// Counters describing the run.
    pub stats: ScheduleStats,
}

/// Single-pass hazard resolving scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduler {
    policy: Policy,
    reorder_window: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl Scheduler {
    /// Creates a scheduler for the given policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            reorder_window: DEFAULT_REORDER_WINDOW,
        }
    }

    /// Creates a scheduler from a numeric policy selector.
    ///
    /// # Arguments
    ///
    /// * `selector` - 0 stall, 1 reorder, 2 forward, 3 best choice
    ///
    /// # Returns
    ///
    /// The scheduler, or `InvalidPolicy` for any other selector.
    pub fn from_selector(selector: u8) -> Result<Self, ScheduleError> {
        Policy::try_from(selector).map(Self::new)
    }

    /// Sets how far ahead of the producer the reorder search may look.
    pub fn with_reorder_window(mut self, window: usize) -> Self {
        self.reorder_window = window;
        self
    }

    /// Returns the selected policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the reorder search window.
    pub fn reorder_window(&self) -> usize {
        self.reorder_window
    }

    /// Resolves every RAW hazard in `input`.
    ///
    /// # Arguments
    ///
    /// * `input` - The instruction stream in program order
    ///
    /// # Returns
    ///
    /// The rewritten schedule with the resolutions applied and run statistics.
    /// An empty input yields an empty schedule.
    pub fn run(&self, input: &Schedule) -> ScheduleOutcome {
        let program = input.as_slice();
        let mut pending = vec![true; program.len()];
        let mut output = Schedule::new();
        let mut resolutions = Vec::new();

        for idx in 0..program.len() {
            if !pending[idx] {
                continue;
            }
            pending[idx] = false;
            output.push(program[idx].clone());

            let Some(consumer) = find_raw_consumer(program, idx, |k| !pending[k]) else {
                continue;
            };

            let ctx = HazardContext {
                program,
                producer: idx,
                consumer,
                pending: &pending,
                reorder_window: self.reorder_window,
            };
            let action = self.policy.decide(&ctx);

            debug!(
                producer = idx,
                consumer,
                register = %program[idx].writes().map(|r| r.name()).unwrap_or("?"),
                ?action,
                "RAW hazard `{}` -> `{}`",
                program[idx],
                program[consumer]
            );

            match action {
                Action::Stall | Action::Forward => output.push(Instruction::Nop),
                Action::Reorder { moved } => {
                    pending[moved] = false;
                    output.push(program[moved].clone());
                }
            }

            resolutions.push(Resolution {
                producer: idx,
                consumer,
                action,
            });
        }

        let stats = ScheduleStats::collect(self.policy, input, &output, &resolutions);
        info!(
            policy = %self.policy,
            input = input.len(),
            output = output.len(),
            hazards = resolutions.len(),
            "schedule resolved"
        );

        ScheduleOutcome {
            schedule: output,
            resolutions,
            stats,
        }
    }
}

/// Resolves hazards in `input` with the policy named by `selector`.
///
/// # Arguments
///
/// * `input` - The instruction stream in program order
/// * `selector` - 0 stall, 1 reorder, 2 forward, 3 best choice
///
/// # Returns
///
/// The hazard-free schedule, or `InvalidPolicy` before any work is done.
pub fn schedule(input: &Schedule, selector: u8) -> Result<Schedule, ScheduleError> {
    let scheduler = Scheduler::from_selector(selector)?;
    Ok(scheduler.run(input).schedule)
}
