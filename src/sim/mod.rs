//! Simulation harness support.
//!
//! Loads program and data images into word vectors ready to be placed in
//! instruction or data memory.

/// Program image loaders.
pub mod loader;
