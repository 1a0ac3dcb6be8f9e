//! Common types used throughout the MIPS datapath simulator.
//!
//! This module provides the memory access classification and the error
//! taxonomy shared across the core, the memories and the loaders.

/// Memory access type definitions.
pub mod data;

/// Error types for decode, memory and harness failures.
pub mod error;

pub use data::AccessType;
pub use error::{DecodeError, MemoryFault, SimError};
