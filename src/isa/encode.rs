//! Instruction Encoders.
//!
//! Builds instruction words for the supported subset. Used by the tests and
//! handy when hand-assembling small program images.

use super::{funct, opcodes};

/// Encodes a register-format word.
pub fn r_type(rs: u32, rt: u32, rd: u32, shamt: u32, funct: u32) -> u32 {
    (opcodes::OP_SPECIAL << 26)
        | ((rs & 0x1f) << 21)
        | ((rt & 0x1f) << 16)
        | ((rd & 0x1f) << 11)
        | ((shamt & 0x1f) << 6)
        | (funct & 0x3f)
}

/// Encodes an immediate-format word. Only the low 16 bits of `imm` are kept.
pub fn i_type(opcode: u32, rs: u32, rt: u32, imm: i32) -> u32 {
    ((opcode & 0x3f) << 26) | ((rs & 0x1f) << 21) | ((rt & 0x1f) << 16) | (imm as u32 & 0xffff)
}

/// Encodes a jump-format word.
pub fn j_type(opcode: u32, address: u32) -> u32 {
    ((opcode & 0x3f) << 26) | (address & 0x03ff_ffff)
}

pub fn sll(rd: u32, rt: u32, shamt: u32) -> u32 {
    r_type(0, rt, rd, shamt, funct::SLL)
}

pub fn add(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADD)
}

pub fn addu(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::ADDU)
}

pub fn sub(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::SUB)
}

pub fn subu(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::SUBU)
}

pub fn and(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::AND)
}

pub fn or(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::OR)
}

pub fn xor(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::XOR)
}

pub fn slt(rd: u32, rs: u32, rt: u32) -> u32 {
    r_type(rs, rt, rd, 0, funct::SLT)
}

pub fn addi(rt: u32, rs: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_ADDI, rs, rt, imm)
}

pub fn addiu(rt: u32, rs: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_ADDIU, rs, rt, imm)
}

pub fn slti(rt: u32, rs: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_SLTI, rs, rt, imm)
}

pub fn lui(rt: u32, imm: u32) -> u32 {
    i_type(opcodes::OP_LUI, 0, rt, imm as i32)
}

pub fn lw(rt: u32, offset: i32, base: u32) -> u32 {
    i_type(opcodes::OP_LW, base, rt, offset)
}

pub fn sw(rt: u32, offset: i32, base: u32) -> u32 {
    i_type(opcodes::OP_SW, base, rt, offset)
}

/// Branch offsets are in words, relative to the following instruction.
pub fn beq(rs: u32, rt: u32, offset: i32) -> u32 {
    i_type(opcodes::OP_BEQ, rs, rt, offset)
}

pub fn bne(rs: u32, rt: u32, offset: i32) -> u32 {
    i_type(opcodes::OP_BNE, rs, rt, offset)
}

/// `target` is a byte address; its low 28 bits are encoded.
pub fn j(target: u32) -> u32 {
    j_type(opcodes::OP_J, target >> 2)
}
