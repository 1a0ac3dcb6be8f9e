//! CPU core.
//!
//! This module contains the single-cycle datapath: the control unit, the
//! execution units, the per-cycle stages and the architectural register
//! file, tied together by [`Cpu`].

/// Architectural state (register file).
pub mod arch;

/// Control unit and control signal definitions.
pub mod control;

/// The CPU and its per-cycle driving loop.
pub mod cpu;

/// Datapath stage implementations.
pub mod stages;

/// Functional units (ALU).
pub mod units;

pub use cpu::{Cpu, CpuSnapshot, RunOutcome};
