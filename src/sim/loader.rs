//! Program Image Loader.
//!
//! This module reads program and data images from disk. Two formats are
//! accepted: hexadecimal text with one 32-bit word per line, and raw
//! big-endian binary.

use crate::common::SimError;
use std::fs;
use std::path::Path;

/// Parses a hexadecimal text image.
///
/// One word per line, with or without a `0x` prefix. Blank lines are
/// skipped; `#` and `//` start a comment that runs to the end of the line.
pub fn parse_hex_image(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();

    for (n, raw) in text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line)
            .replace('_', "");

        let word = u32::from_str_radix(&digits, 16).map_err(|e| SimError::Image {
            line: n + 1,
            reason: format!("'{}': {}", line, e),
        })?;
        words.push(word);
    }

    Ok(words)
}

/// Parses a raw binary image of big-endian 32-bit words.
pub fn parse_binary_image(bytes: &[u8]) -> Result<Vec<u32>, SimError> {
    if bytes.len() % 4 != 0 {
        return Err(SimError::Image {
            line: 0,
            reason: format!(
                "binary image length {} is not a multiple of 4 bytes",
                bytes.len()
            ),
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Loads an image file from disk.
///
/// Files ending in `.bin` are read as binary; everything else as hex text.
pub fn load_image(path: &str) -> Result<Vec<u32>, SimError> {
    let io_err = |source| SimError::Io {
        path: path.to_string(),
        source,
    };

    let is_binary = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bin"));

    let words = if is_binary {
        parse_binary_image(&fs::read(path).map_err(io_err)?)?
    } else {
        parse_hex_image(&fs::read_to_string(path).map_err(io_err)?)?
    };

    tracing::debug!(path, words = words.len(), binary = is_binary, "loaded image");
    Ok(words)
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}
