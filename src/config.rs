//! Simulator configuration.
//!
//! Deserialized from TOML. Every field has a default, so an empty file (or
//! no file at all) yields [`Config::default`].

use crate::common::SimError;
use serde::Deserialize;
use std::fs;

const DEFAULT_START_PC: u32 = 0x0;
const DEFAULT_MAX_CYCLES: u64 = 100_000;
const DEFAULT_MEMORY_WORDS: usize = 16 * 1024;
const DEFAULT_DATA_BASE: u32 = 0x0;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_instructions: bool,

    #[serde(default = "default_start_pc")]
    pub start_pc: String,

    /// Cycle limit for `Cpu::run`; 0 disables the limit.
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: default_start_pc(),
            max_cycles: default_max_cycles(),
        }
    }
}

impl GeneralConfig {
    pub fn start_pc_val(&self) -> Result<u32, SimError> {
        parse_hex("general.start_pc", &self.start_pc)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    #[serde(default = "default_memory_words")]
    pub instruction_words: usize,

    #[serde(default = "default_memory_words")]
    pub data_words: usize,

    /// Byte address of data word 0.
    #[serde(default = "default_data_base")]
    pub data_base: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instruction_words: default_memory_words(),
            data_words: default_memory_words(),
            data_base: default_data_base(),
        }
    }
}

impl MemoryConfig {
    pub fn data_base_val(&self) -> Result<u32, SimError> {
        parse_hex("memory.data_base", &self.data_base)
    }
}

impl Config {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self, SimError> {
        let config: Config = toml::from_str(text).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &str) -> Result<Self, SimError> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_string(),
            source,
        })?;
        tracing::debug!(path, "loaded configuration file");
        Self::from_toml_str(&text)
    }

    /// Checks the values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), SimError> {
        let start_pc = self.general.start_pc_val()?;
        if start_pc % 4 != 0 {
            return Err(SimError::Config(format!(
                "general.start_pc {:#x} is not word aligned",
                start_pc
            )));
        }
        let data_base = self.memory.data_base_val()?;
        if data_base % 4 != 0 {
            return Err(SimError::Config(format!(
                "memory.data_base {:#x} is not word aligned",
                data_base
            )));
        }
        if self.memory.instruction_words == 0 {
            return Err(SimError::Config(
                "memory.instruction_words must be non-zero".to_string(),
            ));
        }
        if self.memory.data_words == 0 {
            return Err(SimError::Config(
                "memory.data_words must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_hex(key: &str, s: &str) -> Result<u32, SimError> {
    let digits = s.trim().trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(digits, 16)
        .map_err(|e| SimError::Config(format!("{} = '{}': {}", key, s, e)))
}

fn default_start_pc() -> String {
    format!("{:#x}", DEFAULT_START_PC)
}

fn default_max_cycles() -> u64 {
    DEFAULT_MAX_CYCLES
}

fn default_memory_words() -> usize {
    DEFAULT_MEMORY_WORDS
}

fn default_data_base() -> String {
    format!("{:#x}", DEFAULT_DATA_BASE)
}
