//! MIPS Pipeline Hazard Scheduler Library.
//!
//! This crate statically rewrites a MIPS instruction stream so that it runs
//! hazard-free on a simple in-order pipeline. It detects Read-After-Write
//! dependencies and resolves each one by inserting a bubble, forwarding, or
//! moving a later independent instruction into the hazard slot.
//!
//! # Architecture
//!
//! * **Instruction model**: immutable tagged union over register, immediate and
//!   jump formats plus the scheduler's `NOP` bubble.
//! * **Dependency analyzer**: pure RAW/WAR/WAW classification of instruction pairs.
//! * **Resolution policies**: stall, forward, reorder and best choice.
//! * **Scheduler**: single deterministic left-to-right pass.
//!
//! # Modules
//!
//! * `common`: Register identifiers and error types.
//! * `config`: Configuration loading and parsing.
//! * `core`: Hazard analysis, policies and the scheduler.
//! * `isa`: Instruction set definitions, decoding and rendering.
//! * `sim`: Source loading and schedule persistence.
//! * `stats`: Per-run statistics.

/// Register identifiers and error types shared across the crate.
pub mod common;

/// Configuration system for policy selection, reorder window and output naming.
///
/// Loads and parses TOML configuration files; every key has a default.
pub mod config;

/// Hazard resolution engine.
///
/// Implements the dependency analyzer, the resolution policies, the reorder
/// legality check and the scheduler pass that ties them together.
pub mod core;

/// Instruction Set Architecture definitions.
///
/// Implements the MIPS mnemonic table, the decoded instruction model, the
/// line decoder and the assembly renderer.
pub mod isa;

/// Program loading and schedule persistence.
pub mod sim;

/// Scheduling statistics collection and reporting.
pub mod stats;

pub use crate::core::{schedule, Policy, Scheduler};
pub use crate::isa::{Instruction, Schedule};
