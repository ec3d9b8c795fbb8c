//! Schedule Writer.
//!
//! Persists a resolved schedule as assembly text, one instruction per line.
//! A failed write leaves the in-memory schedule untouched.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::{Error, Result};
use crate::isa::Schedule;

/// Derives the output path by appending `suffix` to the input file name.
///
/// `prog/add.s` with suffix `_RESULT` becomes `prog/add.s_RESULT`.
pub fn default_destination(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes a schedule to `path`, creating missing parent directories.
///
/// # Arguments
///
/// * `path` - Destination file, overwritten if it exists
/// * `schedule` - The schedule to render
pub fn write_schedule(path: impl AsRef<Path>, schedule: &Schedule) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(write_err)?;
            info!(dir = %parent.display(), "created output directory");
        }
    }

    let mut out = BufWriter::new(File::create(path).map_err(write_err)?);
    for inst in schedule {
        writeln!(out, "{}", inst).map_err(write_err)?;
    }
    out.flush().map_err(write_err)?;

    info!(path = %path.display(), instructions = schedule.len(), "schedule written");
    Ok(())
}
