//! Architectural state of the MIPS core.
//!
//! The only architectural storage inside the core is the general-purpose
//! register file; the memories live in `soc`.

/// General-Purpose Register file implementation.
pub mod gpr;
