//! Next program counter computation.

use crate::core::control::ControlSignals;
use crate::isa::InstructionFields;

/// Region bits kept from `pc + 4` by a jump.
const JUMP_REGION_MASK: u32 = 0xf000_0000;

/// Bits supplied by the jump address field.
const JUMP_TARGET_MASK: u32 = 0x0fff_ffff;

/// Decides whether a conditional branch is taken.
///
/// `bne` is taken when the ALU zero flag is clear, `beq` when it is set.
pub fn branch_taken(ctrl: &ControlSignals, zero: bool) -> bool {
    if ctrl.branch_on_not_equal() {
        !zero
    } else {
        zero
    }
}

/// Computes the program counter of the next cycle.
///
/// Priority: jump, then branch, then sequential. A jump keeps the top four
/// bits of `pc + 4` and fills the rest with `address << 2`; a taken branch
/// adds `imm32 << 2` to `pc + 4`.
pub fn next_pc(fields: &InstructionFields, ctrl: &ControlSignals, zero: bool, pc: u32) -> u32 {
    let pc_plus_4 = pc.wrapping_add(4);

    if ctrl.jump {
        return (pc_plus_4 & JUMP_REGION_MASK) | ((fields.address << 2) & JUMP_TARGET_MASK);
    }

    if ctrl.branch && branch_taken(ctrl, zero) {
        return pc_plus_4.wrapping_add(fields.imm32 << 2);
    }

    pc_plus_4
}
