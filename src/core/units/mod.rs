//! Functional units used by the execute stage.

/// Integer Arithmetic Logic Unit.
pub mod alu;

pub use alu::{Alu, AluResult};
