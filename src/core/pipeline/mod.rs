//! Static pipeline hazard analysis.
//!
//! This module contains the dependency analyzer, the resolution policies and
//! the reorder legality check used by the scheduler.

/// RAW/WAR/WAW dependency detection.
pub mod hazards;

/// Resolution policies and the actions they choose.
pub mod policy;

/// Reorder legality and filler search.
pub mod reorder;
