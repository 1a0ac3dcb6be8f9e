//! Memory Port Traits.
//!
//! This module defines the interfaces the datapath uses to reach the
//! instruction and data memories. Addresses are byte addresses; the word
//! index is the address divided by 4.

use crate::common::{AccessType, MemoryFault};

/// Read-only, word-addressed instruction memory.
pub trait InstructionSource {
    /// Fetches the word at byte address `pc`.
    fn fetch(&self, pc: u32) -> Result<u32, MemoryFault>;
}

/// Word-addressed data memory shared by loads and stores.
pub trait DataBus {
    /// Reads the word at byte address `addr`.
    fn load_word(&self, addr: u32) -> Result<u32, MemoryFault>;

    /// Writes `val` to the word at byte address `addr`.
    fn store_word(&mut self, addr: u32, val: u32) -> Result<(), MemoryFault>;
}

/// Maps a byte address to an index into `len` words.
pub(crate) fn word_index(
    addr: u32,
    base: u32,
    len: usize,
    access: AccessType,
) -> Result<usize, MemoryFault> {
    let index = (addr.wrapping_sub(base) / 4) as usize;
    if index < len {
        Ok(index)
    } else {
        Err(MemoryFault {
            access,
            addr,
            index,
            len,
        })
    }
}

impl InstructionSource for [u32] {
    fn fetch(&self, pc: u32) -> Result<u32, MemoryFault> {
        word_index(pc, 0, self.len(), AccessType::Fetch).map(|i| self[i])
    }
}

impl DataBus for [u32] {
    fn load_word(&self, addr: u32) -> Result<u32, MemoryFault> {
        word_index(addr, 0, self.len(), AccessType::Read).map(|i| self[i])
    }

    fn store_word(&mut self, addr: u32, val: u32) -> Result<(), MemoryFault> {
        let i = word_index(addr, 0, self.len(), AccessType::Write)?;
        self[i] = val;
        Ok(())
    }
}
