//! Scheduling statistics collection and reporting.
//!
//! Summarizes one scheduling run: how many hazards were found, how each was
//! resolved, and how much the schedule grew.

use serde::Serialize;

use crate::core::pipeline::policy::{Action, Policy, Resolution};
use crate::isa::{Instruction, Schedule};

/// Counters describing one scheduling run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    pub policy: Policy,
    pub instructions_in: usize,
    pub instructions_out: usize,
    pub malformed: usize,
    pub hazards_raw: usize,
    pub stalls: usize,
    pub forwards: usize,
    pub reorders: usize,
    pub nops_inserted: usize,
}

impl ScheduleStats {
    /// Gathers the counters from a finished run.
    ///
    /// # Arguments
    ///
    /// * `policy` - Policy the run used
    /// * `input` - The schedule handed to the scheduler
    /// * `output` - The resolved schedule
    /// * `resolutions` - Every hazard resolution applied
    pub fn collect(
        policy: Policy,
        input: &Schedule,
        output: &Schedule,
        resolutions: &[Resolution],
    ) -> Self {
        let mut stats = Self {
            policy,
            instructions_in: input.len(),
            instructions_out: output.len(),
            malformed: input
                .iter()
                .filter(|i| matches!(i, Instruction::Malformed(_)))
                .count(),
            hazards_raw: resolutions.len(),
            nops_inserted: output.nop_count().saturating_sub(input.nop_count()),
            ..Default::default()
        };

        for res in resolutions {
            match res.action {
                Action::Stall => stats.stalls += 1,
                Action::Forward => stats.forwards += 1,
                Action::Reorder { .. } => stats.reorders += 1,
            }
        }
        stats
    }

    /// Renders the statistics as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Prints a formatted summary of the run.
    ///
    /// Displays instruction counts, the resolution breakdown and the growth
    /// of the schedule in a human-readable format.
    pub fn print(&self) {
        let hazards = if self.hazards_raw == 0 {
            1
        } else {
            self.hazards_raw
        };
        let growth = if self.instructions_in == 0 {
            0.0
        } else {
            (self.instructions_out as f64 / self.instructions_in as f64 - 1.0) * 100.0
        };
        let pct = |n: usize| (n as f64 / hazards as f64) * 100.0;

        println!("\n==========================================================");
        println!("PIPELINE HAZARD SCHEDULING STATISTICS");
        println!("==========================================================");
        println!("policy                   {}", self.policy);
        println!("insts.in                 {}", self.instructions_in);
        println!("insts.out                {}", self.instructions_out);
        println!("insts.malformed          {}", self.malformed);
        println!("schedule.growth          {:.2}%", growth);
        println!("----------------------------------------------------------");
        println!("HAZARD RESOLUTION");
        println!("  hazards.raw            {}", self.hazards_raw);
        println!(
            "  resolved.stall         {} ({:.2}%)",
            self.stalls,
            pct(self.stalls)
        );
        println!(
            "  resolved.forward       {} ({:.2}%)",
            self.forwards,
            pct(self.forwards)
        );
        println!(
            "  resolved.reorder       {} ({:.2}%)",
            self.reorders,
            pct(self.reorders)
        );
        println!("  nops.inserted          {}", self.nops_inserted);
        println!("==========================================================");
    }
}
