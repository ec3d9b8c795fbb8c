//! Program I/O around the scheduler.
//!
//! Loads assembly source files into schedules and writes resolved schedules
//! back out.

/// Source file loading and decoding.
pub mod loader;

/// Resolved schedule persistence.
pub mod writer;

pub use loader::{load_program, load_schedule, parse_program, parse_schedule, LoadedProgram};
pub use writer::{default_destination, write_schedule};
