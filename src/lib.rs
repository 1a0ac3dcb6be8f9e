//! Single-Cycle MIPS Datapath Simulator Library.
//!
//! This crate implements a functional simulator for a single-cycle processor
//! executing a subset of the MIPS32 instruction set. Every instruction is
//! fetched, decoded, executed, given its memory access and written back in
//! one simulated clock cycle.
//!
//! # Architecture
//!
//! * **Core**: Field extraction, control unit, ALU input selectors, ALU,
//!   memory stage, next-PC unit and write-back unit.
//! * **Memory**: Word-addressed, bounds-checked instruction and data memories.
//!
//! # Modules
//!
//! * `common`: Shared types and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU core implementation.
//! * `isa`: Instruction Set Architecture definitions.
//! * `sim`: Program image loaders.
//! * `soc`: Memory components.
//! * `stats`: Execution statistics collection.

/// Shared types and error handling.
///
/// Provides the error taxonomy and memory access classification used
/// throughout the simulator.
pub mod common;

/// Configuration system for the processor and memory sizes.
///
/// Loads and parses TOML configuration files to customize simulator behavior.
pub mod config;

/// CPU core implementation including datapath stages and execution units.
///
/// Implements the single-cycle datapath (Fetch, Decode, Execute, Memory,
/// Next-PC, Writeback) and the architectural register file.
pub mod core;

/// Instruction Set Architecture definitions, field extraction and encoders.
pub mod isa;

/// Program image loaders.
pub mod sim;

/// Instruction and data memories.
pub mod soc;

/// Execution statistics collection and reporting.
pub mod stats;
