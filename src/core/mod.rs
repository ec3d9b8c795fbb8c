//! Hazard resolution engine.
//!
//! This module contains the pipeline hazard analysis (`pipeline`) and the
//! scheduler that drives it over an instruction stream (`scheduler`).

/// Hazard detection, resolution policies and reorder legality.
pub mod pipeline;

/// Single-pass hazard resolving scheduler.
pub mod scheduler;

pub use pipeline::policy::{Action, Policy, Resolution};
pub use scheduler::{schedule, ScheduleOutcome, Scheduler};
