//! Error taxonomy.
//!
//! The core detects exactly one error kind on its own, [`DecodeError`].
//! Memory faults come from the bounds-checked memories and every harness
//! failure (I/O, image parsing, configuration) is folded into [`SimError`].

use super::data::AccessType;
use thiserror::Error;

/// The control unit does not support this opcode/funct combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Register-format word (opcode 0) with an unsupported function code.
    #[error("unsupported funct {0:#04x} for opcode 0x00")]
    UnsupportedFunct(u32),

    /// Unsupported primary opcode.
    #[error("unsupported opcode {0:#04x}")]
    UnsupportedOpcode(u32),
}

/// A word index outside the bounds of a memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{access} fault at address {addr:#010x} (word {index}, memory holds {len} words)")]
pub struct MemoryFault {
    pub access: AccessType,
    pub addr: u32,
    pub index: usize,
    pub len: usize,
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("decode failure at pc {pc:#010x} (word {word:#010x}): {source}")]
    Decode {
        pc: u32,
        word: u32,
        #[source]
        source: DecodeError,
    },

    #[error("memory fault: {0}")]
    Memory(#[from] MemoryFault),

    #[error("i/o error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed program image at line {line}: {reason}")]
    Image { line: usize, reason: String },

    #[error("program image of {words} words does not fit in {capacity}-word {memory} memory")]
    ImageTooLarge {
        memory: &'static str,
        words: usize,
        capacity: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}
