//! Memory Access Types.
//!
//! This module defines the classification of memory accesses. The memories
//! attach it to every fault so a report can tell an instruction fetch that
//! ran off the program apart from a load or store with a bad address.

use serde::Serialize;
use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AccessType {
    /// Instruction fetch from instruction memory.
    Fetch,

    /// Data read access (load word).
    Read,

    /// Data write access (store word).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessType::Fetch => "fetch",
            AccessType::Read => "load",
            AccessType::Write => "store",
        };
        f.write_str(name)
    }
}
