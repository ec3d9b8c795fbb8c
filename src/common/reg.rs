//! Register Identifiers.
//!
//! Registers are opaque to the scheduler: two operands refer to the same
//! register exactly when their names are equal. No numbering or ABI aliasing
//! (`$8` versus `$t0`) is applied.

use std::fmt;

/// Name of the hardwired zero register, used as the implicit `rs` of `lui`.
pub const ZERO: &str = "$zero";

/// An opaque register identifier as written in the source (`$t0`, `$sp`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(String);

impl Register {
    /// Creates a register identifier from its source spelling.
    ///
    /// # Arguments
    ///
    /// * `name` - Register name, surrounding whitespace is trimmed
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Returns the hardwired zero register.
    pub fn zero() -> Self {
        Self(ZERO.to_string())
    }

    /// Returns the register name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Register {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
