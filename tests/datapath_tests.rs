//! Tests for operand selection, the memory stage, next-PC and writeback.

use mips_sim::common::{AccessType, MemoryFault};
use mips_sim::core::arch::gpr::Gpr;
use mips_sim::core::control::{decode, ControlSignals};
use mips_sim::core::stages::{
    alu_input_a, alu_input_b, branch_taken, execute_stage, mem_stage, next_pc, wb_stage,
    MemResult,
};
use mips_sim::core::units::AluResult;
use mips_sim::isa::{encode, opcodes, InstructionFields};

fn decoded(word: u32) -> (InstructionFields, ControlSignals) {
    let fields = InstructionFields::extract(word);
    let ctrl = decode(&fields).expect("word should decode");
    (fields, ctrl)
}

fn alu(result: u32) -> AluResult {
    AluResult {
        result,
        zero: result == 0,
    }
}

/// Tests operand selection for register arithmetic.
#[test]
fn test_inputs_register_format() {
    let (f, c) = decoded(encode::add(3, 1, 2));
    assert_eq!(alu_input_a(&c, &f, 11, 22), 11);
    assert_eq!(alu_input_b(&c, &f, 11, 22), 22);
}

/// Tests operand selection for immediate arithmetic.
#[test]
fn test_inputs_immediate() {
    let (f, c) = decoded(encode::addi(2, 1, -1));
    assert_eq!(alu_input_a(&c, &f, 11, 22), 11);
    assert_eq!(alu_input_b(&c, &f, 11, 22), 0xffff_ffff);
}

/// Tests that shifts take rt and shamt.
#[test]
fn test_inputs_shift() {
    let (f, c) = decoded(encode::sll(2, 1, 4));
    assert_eq!(alu_input_a(&c, &f, 99, 1), 1);
    assert_eq!(alu_input_b(&c, &f, 99, 1), 4);
    assert_eq!(execute_stage(&c, &f, 99, 1).result, 16);
}

/// Tests that lui takes zero and the shifted immediate.
#[test]
fn test_inputs_upper_immediate() {
    let (f, c) = decoded(encode::lui(2, 0x1234));
    assert_eq!(alu_input_a(&c, &f, 99, 77), 0);
    assert_eq!(alu_input_b(&c, &f, 99, 77), 0x1234_0000);
    assert_eq!(execute_stage(&c, &f, 99, 77).result, 0x1234_0000);

    let (f, c) = decoded(encode::lui(2, 0xffff));
    assert_eq!(execute_stage(&c, &f, 0, 0).result, 0xffff_0000);
}

/// Tests that branches compare rs with rt.
#[test]
fn test_inputs_branch() {
    let (f, c) = decoded(encode::beq(1, 2, 5));
    assert_eq!(alu_input_b(&c, &f, 7, 7), 7);
    assert!(execute_stage(&c, &f, 7, 7).zero);
    assert!(!execute_stage(&c, &f, 7, 8).zero);
}

/// Tests a store followed by a load at the same address.
#[test]
fn test_mem_store_then_load() {
    let mut mem = [0u32; 8];
    let (_, sw) = decoded(encode::sw(1, 0, 2));
    let (_, lw) = decoded(encode::lw(1, 0, 2));

    let r = mem_stage(&sw, &alu(8), 0xcafe_f00d, &mut mem[..]).unwrap();
    assert_eq!(r, MemResult { read_val: 0 });
    assert_eq!(mem[2], 0xcafe_f00d);

    let r = mem_stage(&lw, &alu(8), 0, &mut mem[..]).unwrap();
    assert_eq!(r.read_val, 0xcafe_f00d);
}

/// Tests that a non-memory instruction reads zero and writes nothing.
#[test]
fn test_mem_idle() {
    let mut mem = [5u32; 4];
    let (_, add) = decoded(encode::add(3, 1, 2));

    let r = mem_stage(&add, &alu(4), 0x1111, &mut mem[..]).unwrap();
    assert_eq!(r.read_val, 0);
    assert_eq!(mem, [5; 4]);
}

/// Tests bounds checking on loads and stores.
#[test]
fn test_mem_out_of_range() {
    let mut mem = [0u32; 8];
    let (_, lw) = decoded(encode::lw(1, 0, 2));
    let (_, sw) = decoded(encode::sw(1, 0, 2));

    assert_eq!(
        mem_stage(&lw, &alu(32), 0, &mut mem[..]),
        Err(MemoryFault {
            access: AccessType::Read,
            addr: 32,
            index: 8,
            len: 8,
        })
    );

    let fault = mem_stage(&sw, &alu(0x100), 9, &mut mem[..]).unwrap_err();
    assert_eq!(fault.access, AccessType::Write);
    assert_eq!(mem, [0; 8]);
}

/// Tests sequential next-PC.
#[test]
fn test_next_pc_sequential() {
    let (f, c) = decoded(encode::add(3, 1, 2));
    assert_eq!(next_pc(&f, &c, true, 0x100), 0x104);
    assert_eq!(next_pc(&f, &c, false, 0xffff_fffc), 0);
}

/// Tests beq taken and not-taken paths.
#[test]
fn test_next_pc_beq() {
    let (f, c) = decoded(encode::beq(1, 2, 3));
    assert!(branch_taken(&c, true));
    assert!(!branch_taken(&c, false));
    assert_eq!(next_pc(&f, &c, true, 0x100), 0x110);
    assert_eq!(next_pc(&f, &c, false, 0x100), 0x104);
}

/// Tests bne taken and not-taken paths.
#[test]
fn test_next_pc_bne() {
    let (f, c) = decoded(encode::bne(1, 2, 3));
    assert!(branch_taken(&c, false));
    assert!(!branch_taken(&c, true));
    assert_eq!(next_pc(&f, &c, false, 0x100), 0x110);
    assert_eq!(next_pc(&f, &c, true, 0x100), 0x104);
}

/// Tests backward branches.
#[test]
fn test_next_pc_backward_branch() {
    let (f, c) = decoded(encode::beq(1, 2, -2));
    assert_eq!(next_pc(&f, &c, true, 0x100), 0xfc);

    let (f, c) = decoded(encode::bne(1, 2, -1));
    assert_eq!(next_pc(&f, &c, false, 0x100), 0x100);

    let (f, c) = decoded(encode::bne(1, 2, -0x8000));
    assert_eq!(next_pc(&f, &c, false, 0x0004_0000), 0x0002_0004);
}

/// Tests jump target assembly, including across the top-4-bits boundary.
#[test]
fn test_next_pc_jump() {
    let jump = |pc: u32, address: u32| {
        let (f, c) = decoded(encode::j_type(opcodes::OP_J, address));
        next_pc(&f, &c, false, pc)
    };

    assert_eq!(jump(0x0000_0000, 0x10), 0x40);
    assert_eq!(jump(0x0fff_fffc, 0x100), 0x1000_0400);
    assert_eq!(jump(0x4000_0000, 0x03ff_ffff), 0x4fff_fffc);

    for (pc, a) in [(0x0fff_fff8, 7u32), (0xffff_fffc, 0x123), (0x7000_0010, 0x02ab_cdef)] {
        assert_eq!(
            jump(pc, a),
            (pc.wrapping_add(4) & 0xf000_0000) | ((a << 2) & 0x0fff_ffff)
        );
    }
}

/// Tests writeback to rd for register-format instructions.
#[test]
fn test_wb_register_format() {
    let mut regs = Gpr::new();
    let (f, c) = decoded(encode::add(3, 1, 2));

    let written = wb_stage(&f, &c, &alu(42), &MemResult { read_val: 7 }, &mut regs);
    assert_eq!(written, Some((3, 42)));
    assert_eq!(regs.read(3), 42);
    assert_eq!(regs.read(2), 0);
}

/// Tests writeback of a loaded word to rt.
#[test]
fn test_wb_load() {
    let mut regs = Gpr::new();
    let (f, c) = decoded(encode::lw(5, 0, 1));

    wb_stage(&f, &c, &alu(0x40), &MemResult { read_val: 0xbeef }, &mut regs);
    assert_eq!(regs.read(5), 0xbeef);
}

/// Tests that $0 is never written.
#[test]
fn test_wb_never_writes_zero_register() {
    let mut regs = Gpr::new();

    for word in [encode::add(0, 1, 2), encode::addi(0, 1, 5), encode::lw(0, 0, 1)] {
        let (f, c) = decoded(word);
        let written = wb_stage(&f, &c, &alu(123), &MemResult { read_val: 456 }, &mut regs);
        assert_eq!(written, None);
        assert_eq!(regs.read(0), 0);
    }
}

/// Tests that instructions without reg_write leave the file untouched.
#[test]
fn test_wb_disabled() {
    let mut regs = Gpr::new();
    let before = regs.clone();

    for word in [encode::sw(5, 0, 1), encode::beq(5, 5, 1), encode::j(0x40)] {
        let (f, c) = decoded(word);
        assert_eq!(
            wb_stage(&f, &c, &alu(1), &MemResult { read_val: 2 }, &mut regs),
            None
        );
    }
    assert_eq!(regs, before);
}

/// Tests that the inert vector does nothing anywhere in the datapath.
#[test]
fn test_inert_vector_is_harmless() {
    let mut regs = Gpr::new();
    let mut mem = [3u32; 4];
    let f = InstructionFields::extract(0xffff_ffff);
    let c = ControlSignals::default();

    let r = execute_stage(&c, &f, 10, 20);
    assert_eq!(r.result, 0);
    assert_eq!(mem_stage(&c, &r, 20, &mut mem[..]), Ok(MemResult { read_val: 0 }));
    assert_eq!(mem, [3; 4]);
    assert_eq!(next_pc(&f, &c, r.zero, 0x20), 0x24);
    assert_eq!(wb_stage(&f, &c, &r, &MemResult::default(), &mut regs), None);
}
