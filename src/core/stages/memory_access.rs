//! Memory access stage.
//!
//! Performs at most one load or one store against the data memory, using
//! the ALU result as the byte address. The control table never enables both
//! read and write; this stage does not enforce it.

use crate::common::MemoryFault;
use crate::core::control::ControlSignals;
use crate::core::units::AluResult;
use crate::soc::traits::DataBus;
use serde::Serialize;

/// Result of the memory stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemResult {
    /// Loaded word, or zero when no read happened.
    pub read_val: u32,
}

/// Executes the memory access for one cycle.
///
/// # Errors
///
/// Propagates the [`MemoryFault`] of an out-of-range load or store. A
/// faulting store leaves memory untouched.
pub fn mem_stage<M>(
    ctrl: &ControlSignals,
    alu: &AluResult,
    rt_val: u32,
    mem: &mut M,
) -> Result<MemResult, MemoryFault>
where
    M: DataBus + ?Sized,
{
    let read_val = if ctrl.mem_read {
        mem.load_word(alu.result)?
    } else {
        0
    };

    if ctrl.mem_write {
        mem.store_word(alu.result, rt_val)?;
    }

    Ok(MemResult { read_val })
}
