//! MIPS32 instruction set definitions.
//!
//! Holds the primary opcode and function code values of the supported
//! instruction subset, the field extractor and a small set of encoders.

/// Instruction word builders.
pub mod encode;

/// Instruction field extraction.
pub mod fields;

pub use fields::InstructionFields;

/// Primary opcodes (bits 31:26).
pub mod opcodes {
    /// Register-format instructions, dispatched on `funct`.
    pub const OP_SPECIAL: u32 = 0x00;
    pub const OP_J: u32 = 0x02;
    pub const OP_BEQ: u32 = 0x04;
    pub const OP_BNE: u32 = 0x05;
    pub const OP_ADDI: u32 = 0x08;
    pub const OP_ADDIU: u32 = 0x09;
    pub const OP_SLTI: u32 = 0x0a;
    pub const OP_LUI: u32 = 0x0f;
    pub const OP_LW: u32 = 0x23;
    pub const OP_SW: u32 = 0x2b;
}

/// Function codes for `OP_SPECIAL` (bits 5:0).
pub mod funct {
    pub const SLL: u32 = 0x00;
    pub const ADD: u32 = 0x20;
    pub const ADDU: u32 = 0x21;
    pub const SUB: u32 = 0x22;
    pub const SUBU: u32 = 0x23;
    pub const AND: u32 = 0x24;
    pub const OR: u32 = 0x25;
    pub const XOR: u32 = 0x26;
    pub const SLT: u32 = 0x2a;
}

/// Register numbers with a fixed role.
pub mod abi {
    /// Hard-wired zero register.
    pub const REG_ZERO: usize = 0;
}
