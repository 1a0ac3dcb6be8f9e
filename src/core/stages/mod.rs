//! Datapath stage implementations.
//!
//! One instruction passes through every stage within a single cycle:
//! - Fetch: Reads the instruction word at the program counter
//! - Decode: Extracts fields and derives control signals
//! - Execute: Selects ALU operands and runs the ALU
//! - Memory: Performs at most one load or store
//! - Next PC: Computes the successor program counter
//! - Writeback: Commits the result to the register file
//!
//! Next PC and writeback do not depend on each other and may run in either
//! order.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory_access;

/// Next program counter computation.
pub mod next_pc;

/// Writeback stage implementation.
pub mod write_back;

pub use decode::{decode_stage, Decoded};
pub use execute::{alu_input_a, alu_input_b, execute_stage};
pub use fetch::fetch_stage;
pub use memory_access::{mem_stage, MemResult};
pub use next_pc::{branch_taken, next_pc};
pub use write_back::wb_stage;
