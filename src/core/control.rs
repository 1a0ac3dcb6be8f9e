//! Control Unit.
//!
//! Maps the opcode and function code of a decoded word to the control
//! signals that configure the datapath for one cycle. The dispatch is two
//! level: opcode 0 selects among the register-format operations by `funct`,
//! any other opcode selects an immediate, branch, jump or memory operation.
//!
//! Unsupported encodings are reported as a [`DecodeError`]. No signal vector
//! is produced for them; callers that need one use
//! [`ControlSignals::default`], which is the inert vector.

use crate::common::DecodeError;
use crate::isa::{funct, opcodes, InstructionFields};
use serde::Serialize;

/// ALU operation selected by the control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum AluOp {
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Two's-complement addition (subtraction with `negate`).
    Add,
    /// Set less than, signed.
    Slt,
    /// Bitwise XOR.
    Xor,
    /// Shift left logical.
    Sll,
    /// No operation. The ALU yields zero.
    #[default]
    None,
}

/// Instruction kind recognised by the control unit.
///
/// Carries the discriminations the datapath needs beyond the plain enable
/// bits: which branch sense to test and whether the second ALU operand is
/// the shifted upper immediate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Instruction {
    /// Inert vector; nothing decoded.
    #[default]
    Invalid,
    Sll,
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Xor,
    Slt,
    J,
    Beq,
    Bne,
    Addi,
    Addiu,
    Slti,
    Lui,
    Lw,
    Sw,
}

impl Instruction {
    /// Assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Invalid => "<invalid>",
            Instruction::Sll => "sll",
            Instruction::Add => "add",
            Instruction::Addu => "addu",
            Instruction::Sub => "sub",
            Instruction::Subu => "subu",
            Instruction::And => "and",
            Instruction::Or => "or",
            Instruction::Xor => "xor",
            Instruction::Slt => "slt",
            Instruction::J => "j",
            Instruction::Beq => "beq",
            Instruction::Bne => "bne",
            Instruction::Addi => "addi",
            Instruction::Addiu => "addiu",
            Instruction::Slti => "slti",
            Instruction::Lui => "lui",
            Instruction::Lw => "lw",
            Instruction::Sw => "sw",
        }
    }
}

/// Control signals for one cycle.
///
/// Produced once per instruction by [`decode`] and read by every later
/// stage. The default value is the inert vector: every enable cleared,
/// [`AluOp::None`] and [`Instruction::Invalid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ControlSignals {
    /// Second ALU operand is the sign-extended immediate (vs `rt`).
    pub alu_src: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Negate the second ALU operand before combining.
    pub negate: bool,
    /// Enable data memory read (load).
    pub mem_read: bool,
    /// Enable data memory write (store).
    pub mem_write: bool,
    /// Write back the loaded word instead of the ALU result.
    pub mem_to_reg: bool,
    /// Destination register is `rd` (vs `rt`).
    pub reg_dst: bool,
    /// Enable register write-back.
    pub reg_write: bool,
    /// Conditional branch.
    pub branch: bool,
    /// Unconditional jump.
    pub jump: bool,
    /// Decoded instruction kind.
    pub kind: Instruction,
}

impl ControlSignals {
    /// Returns true for the inert vector.
    pub fn is_inert(&self) -> bool {
        *self == Self::default()
    }

    /// Branch is taken when the ALU result is non-zero.
    pub fn branch_on_not_equal(&self) -> bool {
        self.kind == Instruction::Bne
    }

    /// Second ALU operand is `imm16 << 16` and the first is zero.
    pub fn is_upper_immediate(&self) -> bool {
        self.kind == Instruction::Lui
    }

    /// Register-format arithmetic: `rd <- rs op rt`.
    fn register_op(kind: Instruction, alu: AluOp, negate: bool) -> Self {
        Self {
            alu,
            negate,
            reg_dst: true,
            reg_write: true,
            kind,
            ..Default::default()
        }
    }

    /// Immediate arithmetic: `rt <- rs op imm32`.
    fn immediate_op(kind: Instruction, alu: AluOp, negate: bool) -> Self {
        Self {
            alu_src: true,
            alu,
            negate,
            reg_write: true,
            kind,
            ..Default::default()
        }
    }
}

/// Decodes the control signals for one instruction.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedFunct`] for an opcode 0 word whose
/// function code is outside the supported set, and
/// [`DecodeError::UnsupportedOpcode`] for any other unsupported opcode.
pub fn decode(fields: &InstructionFields) -> Result<ControlSignals, DecodeError> {
    if fields.opcode == opcodes::OP_SPECIAL {
        let (kind, alu, negate) = match fields.funct {
            funct::SLL => (Instruction::Sll, AluOp::Sll, false),
            funct::ADD => (Instruction::Add, AluOp::Add, false),
            funct::ADDU => (Instruction::Addu, AluOp::Add, false),
            funct::SUB => (Instruction::Sub, AluOp::Add, true),
            funct::SUBU => (Instruction::Subu, AluOp::Add, true),
            funct::AND => (Instruction::And, AluOp::And, false),
            funct::OR => (Instruction::Or, AluOp::Or, false),
            funct::XOR => (Instruction::Xor, AluOp::Xor, false),
            funct::SLT => (Instruction::Slt, AluOp::Slt, true),
            other => return Err(DecodeError::UnsupportedFunct(other)),
        };
        return Ok(ControlSignals::register_op(kind, alu, negate));
    }

    let c = match fields.opcode {
        opcodes::OP_J => ControlSignals {
            jump: true,
            kind: Instruction::J,
            ..Default::default()
        },
        opcodes::OP_BEQ | opcodes::OP_BNE => ControlSignals {
            alu: AluOp::Add,
            negate: true,
            branch: true,
            kind: if fields.opcode == opcodes::OP_BNE {
                Instruction::Bne
            } else {
                Instruction::Beq
            },
            ..Default::default()
        },
        opcodes::OP_ADDI => ControlSignals::immediate_op(Instruction::Addi, AluOp::Add, false),
        opcodes::OP_ADDIU => ControlSignals::immediate_op(Instruction::Addiu, AluOp::Add, false),
        opcodes::OP_SLTI => ControlSignals::immediate_op(Instruction::Slti, AluOp::Slt, true),
        opcodes::OP_LUI => ControlSignals::immediate_op(Instruction::Lui, AluOp::Add, false),
        opcodes::OP_LW => ControlSignals {
            mem_read: true,
            mem_to_reg: true,
            ..ControlSignals::immediate_op(Instruction::Lw, AluOp::Add, false)
        },
        opcodes::OP_SW => ControlSignals {
            alu_src: true,
            alu: AluOp::Add,
            mem_write: true,
            kind: Instruction::Sw,
            ..Default::default()
        },
        other => return Err(DecodeError::UnsupportedOpcode(other)),
    };
    Ok(c)
}
