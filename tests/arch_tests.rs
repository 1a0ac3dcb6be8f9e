//! Integration tests for the register file.

use mips_sim::core::arch::gpr::{Gpr, NUM_REGS};

/// Tests general-purpose register read and write operations.
#[test]
fn test_gpr_read_write() {
    let mut gpr = Gpr::new();

    gpr.write(0, 0xdead_beef);
    assert_eq!(gpr.read(0), 0);

    for i in 1..NUM_REGS {
        let val = (i as u32).wrapping_mul(0x1111_1111);
        gpr.write(i, val);
        assert_eq!(gpr.read(i), val);
    }
}

/// Tests that a new register file is all zero.
#[test]
fn test_gpr_initialized_to_zero() {
    let gpr = Gpr::new();
    assert_eq!(gpr.values(), [0; NUM_REGS]);
}

/// Tests that the value snapshot reports $0 as zero.
#[test]
fn test_gpr_values_keep_zero_register() {
    let mut gpr = Gpr::new();
    gpr.write(0, 7);
    gpr.write(31, 9);

    let values = gpr.values();
    assert_eq!(values[0], 0);
    assert_eq!(values[31], 9);
}

/// Tests register naming.
#[test]
fn test_gpr_names() {
    assert_eq!(Gpr::name(0), "zero");
    assert_eq!(Gpr::name(29), "sp");
    assert_eq!(Gpr::name(31), "ra");
    assert_eq!(Gpr::name(32), "?");
}
