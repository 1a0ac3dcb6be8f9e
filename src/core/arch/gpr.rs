//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file, containing
//! 32 registers ($0-$31). It enforces the architectural invariant that
//! register $0 is always hardwired to zero.

/// Number of architectural registers.
pub const NUM_REGS: usize = 32;

/// Conventional register names, indexed by register number.
const REG_NAMES: [&str; NUM_REGS] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "fp",
    "ra",
];

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations.
/// Register $0 is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register.
    /// Register $0 (index 0) always returns 0 regardless of storage.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or more. Indices taken from instruction fields
    /// are 5 bits wide and always in range.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to register $0 are silently ignored.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or more.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all 32 register values.
    pub fn values(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }

    /// Returns the conventional name of a register.
    pub fn name(idx: usize) -> &'static str {
        REG_NAMES.get(idx).copied().unwrap_or("?")
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs (two per line) with hexadecimal formatting.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            println!(
                "${:<2} {:<4}={:#010x}  ${:<2} {:<4}={:#010x}",
                i,
                Self::name(i),
                self.read(i),
                i + 1,
                Self::name(i + 1),
                self.read(i + 1)
            );
        }
    }
}
