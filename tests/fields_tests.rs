//! Integration tests for the instruction field extractor.

use mips_sim::isa::encode;
use mips_sim::isa::fields::sign_extend_16;
use mips_sim::isa::InstructionFields;

/// Tests extraction of an immediate-format word.
#[test]
fn test_extract_i_type() {
    let f = InstructionFields::extract(encode::addi(2, 1, 10));
    assert_eq!(f.opcode, 0x08);
    assert_eq!(f.rs, 1);
    assert_eq!(f.rt, 2);
    assert_eq!(f.imm16, 10);
    assert_eq!(f.imm32, 10);
    assert_eq!(f.address, 0x022_000a);
}

/// Tests extraction of a register-format word.
#[test]
fn test_extract_r_type() {
    let f = InstructionFields::extract(encode::sll(9, 17, 4));
    assert_eq!(f.opcode, 0);
    assert_eq!(f.rs, 0);
    assert_eq!(f.rt, 17);
    assert_eq!(f.rd, 9);
    assert_eq!(f.shamt, 4);
    assert_eq!(f.funct, 0);
}

/// Tests extraction from an all-ones word.
#[test]
fn test_extract_all_ones() {
    let f = InstructionFields::extract(0xffff_ffff);
    assert_eq!(f.opcode, 0x3f);
    assert_eq!(f.rs, 31);
    assert_eq!(f.rt, 31);
    assert_eq!(f.rd, 31);
    assert_eq!(f.shamt, 31);
    assert_eq!(f.funct, 0x3f);
    assert_eq!(f.imm16, 0xffff);
    assert_eq!(f.imm32, 0xffff_ffff);
    assert_eq!(f.address, 0x03ff_ffff);
}

/// Tests sign extension at the 0x7fff / 0x8000 boundary.
#[test]
fn test_imm32_sign_extension_boundary() {
    let below = InstructionFields::extract(0x2000_7fff);
    assert_eq!(below.imm16, 0x7fff);
    assert_eq!(below.imm32, 0x0000_7fff);

    let above = InstructionFields::extract(0x8c9f_8000);
    assert_eq!(above.opcode, 0x23);
    assert_eq!(above.rs, 4);
    assert_eq!(above.rt, 31);
    assert_eq!(above.rd, 16);
    assert_eq!(above.imm16, 0x8000);
    assert_eq!(above.imm32, 0xffff_8000);

    assert_eq!(sign_extend_16(0xffff), 0xffff_ffff);
}

/// Tests the mask/shift invariants over a spread of pseudo-random words.
#[test]
fn test_field_masks_hold_for_many_words() {
    let mut w: u32 = 0x1234_5678;
    for _ in 0..4096 {
        // Numerical Recipes LCG.
        w = w.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let f = InstructionFields::extract(w);

        assert_eq!(f.opcode, (w >> 26) & 0x3f);
        assert_eq!(f.rs as u32, (w >> 21) & 0x1f);
        assert_eq!(f.rt as u32, (w >> 16) & 0x1f);
        assert_eq!(f.rd as u32, (w >> 11) & 0x1f);
        assert_eq!(f.shamt, (w >> 6) & 0x1f);
        assert_eq!(f.funct, w & 0x3f);
        assert_eq!(f.imm16, w & 0xffff);
        assert_eq!(f.imm32 as i32, (w & 0xffff) as u16 as i16 as i32);
        assert_eq!(f.address, w & 0x03ff_ffff);
    }
}
