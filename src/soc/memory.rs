//! Instruction and Data Memories.
//!
//! Both memories are flat vectors of 32-bit words. The instruction memory is
//! filled once from a program image and never written by the core; the data
//! memory is read and written by the memory stage.

use super::traits::{word_index, DataBus, InstructionSource};
use crate::common::{AccessType, MemoryFault, SimError};

/// Read-only instruction memory, indexed by `pc / 4`.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    words: Vec<u32>,
}

impl InstructionMemory {
    /// Creates an instruction memory of `capacity` words holding `image` at
    /// word 0. Unused words are zero.
    pub fn new(capacity: usize, image: &[u32]) -> Result<Self, SimError> {
        Ok(Self {
            words: fill(capacity, image, "instruction")?,
        })
    }

    /// Number of words in the memory.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }
}

impl InstructionSource for InstructionMemory {
    fn fetch(&self, pc: u32) -> Result<u32, MemoryFault> {
        self.words.as_slice().fetch(pc)
    }
}

/// Mutable data memory.
///
/// Byte address `base` maps to word 0.
#[derive(Clone, Debug)]
pub struct DataMemory {
    words: Vec<u32>,
    base: u32,
}

impl DataMemory {
    /// Creates a data memory of `capacity` words with `image` at word 0.
    pub fn new(capacity: usize, base: u32, image: &[u32]) -> Result<Self, SimError> {
        Ok(Self {
            words: fill(capacity, image, "data")?,
            base,
        })
    }

    /// Number of words in the memory.
    pub fn len_words(&self) -> usize {
        self.words.len()
    }

    /// Byte address of word 0.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Iterates over the non-zero words as `(byte address, value)` pairs.
    pub fn non_zero(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| **w != 0)
            .map(move |(i, w)| (self.base.wrapping_add((i as u32) << 2), *w))
    }
}

impl DataBus for DataMemory {
    fn load_word(&self, addr: u32) -> Result<u32, MemoryFault> {
        let i = word_index(addr, self.base, self.words.len(), AccessType::Read)?;
        Ok(self.words[i])
    }

    fn store_word(&mut self, addr: u32, val: u32) -> Result<(), MemoryFault> {
        let i = word_index(addr, self.base, self.words.len(), AccessType::Write)?;
        self.words[i] = val;
        Ok(())
    }
}

fn fill(capacity: usize, image: &[u32], memory: &'static str) -> Result<Vec<u32>, SimError> {
    if image.len() > capacity {
        return Err(SimError::ImageTooLarge {
            memory,
            words: image.len(),
            capacity,
        });
    }
    let mut words = vec![0; capacity];
    words[..image.len()].copy_from_slice(image);
    Ok(words)
}
