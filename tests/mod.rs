//! Test module organization.
//!
//! This module organizes all integration tests for the MIPS simulator.


/// Register file tests.
mod arch_tests;



/// Operand selection, memory, next-PC and writeback stage tests.
mod datapath_tests;

/// Field extractor tests.
mod fields_tests;
