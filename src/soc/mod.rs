//! Memory components of the simulated machine.
//!
//! The instruction and data memories are owned, word-addressed buffers with
//! bounds-checked accessors. The core only sees them through the traits in
//! [`traits`], so tests can substitute plain word slices.

/// Instruction and data memory implementations.
pub mod memory;

/// Interfaces the core uses to reach memory.
pub mod traits;

pub use memory::{DataMemory, InstructionMemory};
pub use traits::{DataBus, InstructionSource};
