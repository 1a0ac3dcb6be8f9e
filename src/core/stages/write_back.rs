use crate::core::arch::gpr::Gpr;
use crate::core::control::ControlSignals;
use crate::core::stages::MemResult;
use crate::core::units::AluResult;
use crate::isa::{abi, InstructionFields};

/// Commits the result of the cycle to the register file.
///
/// The destination is `rd` when `reg_dst` is set and `rt` otherwise; the
/// value is the loaded word when `mem_to_reg` is set and the ALU result
/// otherwise. Writes to register 0 are dropped.
///
/// Returns the `(register, value)` pair actually written, if any.
pub fn wb_stage(
    fields: &InstructionFields,
    ctrl: &ControlSignals,
    alu: &AluResult,
    mem: &MemResult,
    regs: &mut Gpr,
) -> Option<(usize, u32)> {
    if !ctrl.reg_write {
        return None;
    }

    let dest = if ctrl.reg_dst { fields.rd } else { fields.rt };
    let val = if ctrl.mem_to_reg {
        mem.read_val
    } else {
        alu.result
    };

    if dest == abi::REG_ZERO {
        return None;
    }

    regs.write(dest, val);
    Some((dest, val))
}
