use crate::common::MemoryFault;
use crate::soc::traits::InstructionSource;

/// Reads the instruction word at byte address `pc` (word `pc / 4`).
pub fn fetch_stage<I>(pc: u32, imem: &I) -> Result<u32, MemoryFault>
where
    I: InstructionSource + ?Sized,
{
    imem.fetch(pc)
}
