//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and instruction counts, the instruction mix and branch
//! behaviour, and host execution time.

use crate::core::control::{ControlSignals, Instruction};
use std::time::Instant;

/// Simulation statistics structure.
pub struct SimStats {
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,

    pub inst_alu: u64,
    pub inst_shift: u64,
    pub inst_lui: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_jump: u64,

    pub branches_taken: u64,
    pub reg_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_shift: 0,
            inst_lui: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
            reg_writes: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    pub fn retire(&mut self, ctrl: &ControlSignals, taken: bool, wrote_reg: bool) {
        self.instructions_retired += 1;
        if wrote_reg {
            self.reg_writes += 1;
        }

        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch {
            self.inst_branch += 1;
            if taken {
                self.branches_taken += 1;
            }
        } else if ctrl.jump {
            self.inst_jump += 1;
        } else {
            match ctrl.kind {
                Instruction::Sll => self.inst_shift += 1,
                Instruction::Lui => self.inst_lui += 1,
                _ => self.inst_alu += 1,
            }
        }
    }

    /// Prints a formatted summary of all simulation statistics.
    pub fn print(&self) {
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();

        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let total_inst = instr as f64;
        let mips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("MIPS SINGLE-CYCLE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {:.2}", mips);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let row = |name: &str, count: u64| {
            println!(
                "  {:<22} {} ({:.2}%)",
                name,
                count,
                (count as f64 / total_inst) * 100.0
            );
        };
        row("op.alu", self.inst_alu);
        row("op.shift", self.inst_shift);
        row("op.lui", self.inst_lui);
        row("op.load", self.inst_load);
        row("op.store", self.inst_store);
        row("op.branch", self.inst_branch);
        row("op.jump", self.inst_jump);
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        let branch_total = if self.inst_branch == 0 {
            1
        } else {
            self.inst_branch
        };
        println!(
            "  branch.taken           {} ({:.2}%)",
            self.branches_taken,
            (self.branches_taken as f64 / branch_total as f64) * 100.0
        );
        println!("  reg.writes             {}", self.reg_writes);
        println!("==========================================================");
    }
}
