//! ALU input selection and execution.
//!
//! The two operand selectors are independent muxes. The shift and
//! upper-immediate cases are checked before the ordinary `alu_src` mux;
//! the control table never sets both.

use crate::core::control::{AluOp, ControlSignals};
use crate::core::units::{Alu, AluResult};
use crate::isa::InstructionFields;

/// Selects the first ALU operand.
///
/// Zero for `lui`, the `rt` value for shifts, the `rs` value otherwise.
pub fn alu_input_a(
    ctrl: &ControlSignals,
    _fields: &InstructionFields,
    rs_val: u32,
    rt_val: u32,
) -> u32 {
    if ctrl.is_upper_immediate() {
        return 0;
    }
    if ctrl.alu == AluOp::Sll {
        return rt_val;
    }
    rs_val
}

/// Selects the second ALU operand.
///
/// `shamt` for shifts, `imm16 << 16` for `lui`, otherwise `rt` or the
/// sign-extended immediate depending on `alu_src`.
pub fn alu_input_b(
    ctrl: &ControlSignals,
    fields: &InstructionFields,
    _rs_val: u32,
    rt_val: u32,
) -> u32 {
    if ctrl.alu == AluOp::Sll {
        return fields.shamt;
    }
    if ctrl.is_upper_immediate() {
        return fields.imm16 << 16;
    }
    if ctrl.alu_src {
        fields.imm32
    } else {
        rt_val
    }
}

/// Selects both operands and runs the ALU.
pub fn execute_stage(
    ctrl: &ControlSignals,
    fields: &InstructionFields,
    rs_val: u32,
    rt_val: u32,
) -> AluResult {
    let a = alu_input_a(ctrl, fields, rs_val, rt_val);
    let b = alu_input_b(ctrl, fields, rs_val, rt_val);
    Alu::execute(ctrl.alu, ctrl.negate, a, b)
}
