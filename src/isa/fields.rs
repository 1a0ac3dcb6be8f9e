//! Instruction Field Extractor.
//!
//! Splits a raw 32-bit instruction word into its bit-fields. Every field is
//! an independent mask and shift of the word; no cross-field validation is
//! done here, that is the control unit's job.

use serde::Serialize;

/// Mask for the 5-bit register and shift-amount fields.
const MASK_5: u32 = 0x1f;

/// Mask for the 6-bit opcode and funct fields.
const MASK_6: u32 = 0x3f;

/// Mask for the 16-bit immediate.
const MASK_16: u32 = 0xffff;

/// Mask for the 26-bit jump address.
const MASK_26: u32 = 0x03ff_ffff;

/// Decoded view of one instruction word.
///
/// Recomputed every cycle from the fetched word; it has no identity of its
/// own beyond the word it came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InstructionFields {
    /// Primary opcode, bits 31:26.
    pub opcode: u32,
    /// Source register index, bits 25:21.
    pub rs: usize,
    /// Target register index, bits 20:16.
    pub rt: usize,
    /// Destination register index, bits 15:11.
    pub rd: usize,
    /// Shift amount, bits 10:6.
    pub shamt: u32,
    /// Function code, bits 5:0.
    pub funct: u32,
    /// Raw 16-bit immediate, bits 15:0.
    pub imm16: u32,
    /// `imm16` sign-extended to 32 bits.
    pub imm32: u32,
    /// Jump address field, bits 25:0.
    pub address: u32,
}

impl InstructionFields {
    /// Extracts all fields from an instruction word. Cannot fail.
    pub fn extract(word: u32) -> Self {
        let imm16 = word & MASK_16;
        Self {
            opcode: (word >> 26) & MASK_6,
            rs: ((word >> 21) & MASK_5) as usize,
            rt: ((word >> 16) & MASK_5) as usize,
            rd: ((word >> 11) & MASK_5) as usize,
            shamt: (word >> 6) & MASK_5,
            funct: word & MASK_6,
            imm16,
            imm32: sign_extend_16(imm16),
            address: word & MASK_26,
        }
    }
}

/// Sign-extends the low 16 bits of `value` to 32 bits.
pub fn sign_extend_16(value: u32) -> u32 {
    (value as u16) as i16 as i32 as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extension_boundaries() {
        assert_eq!(sign_extend_16(0x7fff), 0x0000_7fff);
        assert_eq!(sign_extend_16(0x8000), 0xffff_8000);
        assert_eq!(sign_extend_16(0xffff), 0xffff_ffff);
        assert_eq!(sign_extend_16(0), 0);
    }
}
