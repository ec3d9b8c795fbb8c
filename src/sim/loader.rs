//! Program Loader.
//!
//! This module reads assembly source files and decodes them line by line into
//! a [`Schedule`]. Fatal decode errors (unknown mnemonics) abort the load;
//! malformed lines are kept as inert instructions and reported as
//! diagnostics. Files written by the scheduler itself are read back with
//! [`load_schedule`], which expects their `op rt, rs, imm` operand order.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::common::{DecodeError, Error, Result};
use crate::isa::{decode_line_with, Schedule, Syntax};

/// A decoded program plus the non-fatal problems found while decoding it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedProgram {
    /// The instructions in program order.
    pub schedule: Schedule,
    /// `MalformedInstruction` diagnostics, in line order.
    pub diagnostics: Vec<DecodeError>,
}

/// Decodes assembly source text.
///
/// # Arguments
///
/// * `source` - Assembly text, one instruction per line
///
/// # Returns
///
/// The decoded program, or the first fatal decode error.
pub fn parse_program(source: &str) -> std::result::Result<LoadedProgram, DecodeError> {
    parse_with(source, Syntax::Assembly)
}

/// Decodes a previously written schedule (`op rt, rs, imm` immediate order).
pub fn parse_schedule(source: &str) -> std::result::Result<LoadedProgram, DecodeError> {
    parse_with(source, Syntax::Schedule)
}

fn parse_with(source: &str, syntax: Syntax) -> std::result::Result<LoadedProgram, DecodeError> {
    let mut program = LoadedProgram::default();
    for (idx, line) in source.lines().enumerate() {
        let Some(decoded) = decode_line_with(idx + 1, line, syntax)? else {
            continue;
        };
        debug!(line = idx + 1, "decoded `{}`", decoded.instruction);
        program.schedule.push(decoded.instruction);
        program.diagnostics.extend(decoded.diagnostic);
    }
    Ok(program)
}

/// Loads and decodes an assembly source file.
///
/// # Arguments
///
/// * `path` - Path of the source file
pub fn load_program(path: impl AsRef<Path>) -> Result<LoadedProgram> {
    load_with(path.as_ref(), Syntax::Assembly)
}

/// Loads a schedule file written by [`crate::sim::write_schedule`].
pub fn load_schedule(path: impl AsRef<Path>) -> Result<LoadedProgram> {
    load_with(path.as_ref(), Syntax::Schedule)
}

fn load_with(path: &Path, syntax: Syntax) -> Result<LoadedProgram> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_with(&source, syntax)?;
    info!(
        path = %path.display(),
        ?syntax,
        instructions = program.schedule.len(),
        malformed = program.diagnostics.len(),
        "program loaded"
    );
    Ok(program)
}
