//! Common types used throughout the scheduler.
//!
//! This module provides the register identifier shared by the instruction
//! model and the hazard analyzer, and the error types returned by every
//! fallible operation in the crate.

/// Error types for policy selection, decoding and I/O.
pub mod error;

/// Register identifier.
pub mod reg;

pub use error::{DecodeError, Error, Result, ScheduleError};
pub use reg::Register;
