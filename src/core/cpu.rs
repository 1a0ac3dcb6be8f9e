//! Single-cycle CPU.
//!
//! Owns the architectural state (program counter, register file) and both
//! memories, and drives one instruction through every stage per call to
//! [`Cpu::tick`]. Each `Cpu` owns its state outright; two instances never
//! share registers or memory.

use super::arch::gpr::Gpr;
use super::stages;
use crate::common::{DecodeError, SimError};
use crate::config::Config;
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;
use serde::Serialize;
use tracing::{info, trace};

/// Why [`Cpu::run`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The word at `pc` did not decode; the machine halts there.
    Halted {
        pc: u32,
        word: u32,
        reason: DecodeError,
    },
    /// The configured cycle limit was reached.
    CycleLimit,
}

/// Serializable view of the machine state.
#[derive(Clone, Debug, Serialize)]
pub struct CpuSnapshot {
    pub pc: u32,
    pub cycles: u64,
    pub instructions: u64,
    pub registers: Vec<u32>,
    /// Non-zero data words as `(byte address, value)`.
    pub data: Vec<(u32, u32)>,
}

pub struct Cpu {
    pub regs: Gpr,
    pub pc: u32,
    pub imem: InstructionMemory,
    pub dmem: DataMemory,
    pub stats: SimStats,
    pub max_cycles: u64,
}

impl Cpu {
    /// Builds a CPU with `program` at instruction word 0 and `data` at data
    /// word 0.
    pub fn new(config: &Config, program: &[u32], data: &[u32]) -> Result<Self, SimError> {
        config.validate()?;
        let imem = InstructionMemory::new(config.memory.instruction_words, program)?;
        let dmem = DataMemory::new(
            config.memory.data_words,
            config.memory.data_base_val()?,
            data,
        )?;

        Ok(Self {
            regs: Gpr::new(),
            pc: config.general.start_pc_val()?,
            imem,
            dmem,
            stats: SimStats::default(),
            max_cycles: config.general.max_cycles,
        })
    }

    /// Executes one instruction.
    ///
    /// Runs fetch, decode, execute, memory, next-PC and writeback, then
    /// commits the new program counter. A decode failure or memory fault
    /// aborts the cycle before any register, memory or PC update.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let pc = self.pc;

        let word = stages::fetch_stage(pc, &self.imem)?;
        trace!("IF  pc={:#010x} inst={:#010x}", pc, word);

        let d = stages::decode_stage(word).map_err(|source| SimError::Decode {
            pc,
            word,
            source,
        })?;
        trace!("ID  pc={:#010x} {} {:?}", pc, d.ctrl.kind.mnemonic(), d.fields);

        let rs_val = self.regs.read(d.fields.rs);
        let rt_val = self.regs.read(d.fields.rt);

        let alu = stages::execute_stage(&d.ctrl, &d.fields, rs_val, rt_val);
        trace!(
            "EX  pc={:#010x} alu={:#010x} zero={}",
            pc,
            alu.result,
            alu.zero
        );

        let mem = stages::mem_stage(&d.ctrl, &alu, rt_val, &mut self.dmem)?;
        if d.ctrl.mem_read {
            trace!(
                "MEM pc={:#010x} LOAD addr={:#010x} data={:#010x}",
                pc,
                alu.result,
                mem.read_val
            );
        } else if d.ctrl.mem_write {
            trace!(
                "MEM pc={:#010x} STORE addr={:#010x} data={:#010x}",
                pc,
                alu.result,
                rt_val
            );
        }

        let next = stages::next_pc(&d.fields, &d.ctrl, alu.zero, pc);
        let written = stages::wb_stage(&d.fields, &d.ctrl, &alu, &mem, &mut self.regs);
        if let Some((rd, val)) = written {
            trace!("WB  pc={:#010x} ${} <= {:#010x}", pc, rd, val);
        }

        let taken = d.ctrl.branch && stages::branch_taken(&d.ctrl, alu.zero);
        self.stats.retire(&d.ctrl, taken, written.is_some());

        trace!("PC  {:#010x} -> {:#010x}", pc, next);
        self.pc = next;
        self.stats.cycles += 1;
        Ok(())
    }

    /// Runs until a word fails to decode or the cycle limit is reached.
    ///
    /// # Errors
    ///
    /// Memory faults are returned as errors; the state is left as it was
    /// before the faulting cycle.
    pub fn run(&mut self) -> Result<RunOutcome, SimError> {
        loop {
            if self.max_cycles != 0 && self.stats.cycles >= self.max_cycles {
                info!(cycles = self.stats.cycles, "cycle limit reached");
                return Ok(RunOutcome::CycleLimit);
            }

            match self.tick() {
                Ok(()) => {}
                Err(SimError::Decode { pc, word, source }) => {
                    info!("halted at pc {:#010x} (word {:#010x}): {}", pc, word, source);
                    return Ok(RunOutcome::Halted {
                        pc,
                        word,
                        reason: source,
                    });
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Captures the architectural state.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            cycles: self.stats.cycles,
            instructions: self.stats.instructions_retired,
            registers: self.regs.values().to_vec(),
            data: self.dmem.non_zero().collect(),
        }
    }

    /// Prints the program counter and register file to stdout.
    pub fn dump_state(&self) {
        println!("pc = {:#010x}", self.pc);
        self.regs.dump();
    }
}
