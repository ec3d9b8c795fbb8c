//! Error Types.
//!
//! This module defines the error handling for the scheduler. It provides:
//! 1. **Policy Errors:** Rejection of an unknown resolution policy selector.
//! 2. **Decode Errors:** Fatal and non-fatal problems found while decoding source lines.
//! 3. **Crate Errors:** I/O and configuration failures, wrapping the two above.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up a scheduling run.
///
/// Raised before any instruction is examined, so a failing run never
/// produces a partial schedule.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The resolution policy selector does not name a known policy.
    ///
    /// The associated value is the selector as the caller supplied it.
    #[error("invalid resolution policy `{0}` (expected stall, reorder, forward, best or 0-3)")]
    InvalidPolicy(String),
}

/// Problems found while decoding source lines into instructions.
///
/// `UnknownMnemonic` is fatal. `MalformedInstruction` is a diagnostic: the
/// decoder substitutes an inert instruction and keeps going.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The first token of a line is not a supported mnemonic.
    #[error("line {line}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic {
        /// 1-based source line number.
        line: usize,
        /// The offending token.
        mnemonic: String,
    },

    /// The text holds no instruction (blank or comment only).
    #[error("line {line}: no instruction")]
    Empty {
        /// 1-based source line number.
        line: usize,
    },

    /// The line lacks the operands its instruction format requires.
    #[error("line {line}: malformed {format} instruction `{text}`")]
    MalformedInstruction {
        /// 1-based source line number.
        line: usize,
        /// Instruction format name (`register`, `immediate` or `jump`).
        format: &'static str,
        /// Original line text.
        text: String,
    },
}

/// Crate-level error type used by the loader, writer and CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a source or configuration file failed.
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing the resolved schedule failed.
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`].
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    /// A source line could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The scheduling run could not be set up.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Convenience alias for results carrying the crate error.
pub type Result<T> = std::result::Result<T, Error>;
