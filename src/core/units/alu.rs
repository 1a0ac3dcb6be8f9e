//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used in the execute stage.
//! Subtraction and the comparisons behind branches and `slt` are realised by
//! negating the second operand and adding, so there is no separate subtract
//! operation. All arithmetic wraps modulo 2^32; nothing traps.

use crate::core::control::AluOp;
use serde::Serialize;

/// Output of the ALU for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AluResult {
    /// Computed word.
    pub result: u32,
    /// Set iff `result` is exactly zero.
    pub zero: bool,
}

impl AluResult {
    fn new(result: u32) -> Self {
        Self {
            result,
            zero: result == 0,
        }
    }
}

/// Arithmetic Logic Unit for the supported integer operations.
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `negate` - Negate `b` (two's complement, wrapping) before combining
    /// * `a` - First operand
    /// * `b` - Second operand, also the shift amount for [`AluOp::Sll`]
    ///
    /// # Returns
    ///
    /// The result word and zero flag. `Slt` compares the original operands
    /// as signed integers and `Sll` shifts by the low 5 bits of the
    /// non-negated `b`. [`AluOp::None`] yields zero.
    pub fn execute(op: AluOp, negate: bool, a: u32, b: u32) -> AluResult {
        /// Bit mask for the shift amount (5 bits: 0-31).
        const SHAMT_MASK: u32 = 0x1f;

        // i32::MIN negates to itself.
        let b_eff = if negate { b.wrapping_neg() } else { b };

        let result = match op {
            AluOp::And => a & b_eff,
            AluOp::Or => a | b_eff,
            AluOp::Add => a.wrapping_add(b_eff),
            AluOp::Slt => ((a as i32) < (b as i32)) as u32,
            AluOp::Xor => a ^ b_eff,
            AluOp::Sll => a << (b & SHAMT_MASK),
            AluOp::None => 0,
        };
        AluResult::new(result)
    }
}
