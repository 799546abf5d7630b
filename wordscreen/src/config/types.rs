// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

use crate::error::ScanError;
use crate::scan::WordScanner;

/// Mask char used when the config does not set one.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Parsed and validated wordscreen config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Config version. Always "v1".
    pub version: String,
    /// Final banned-word list: built-in dictionary (unless disabled), then
    /// configured words, then word files. Lowercased, trimmed, deduplicated.
    pub words: Vec<String>,
    /// Whether the built-in dictionary contributed to `words`.
    pub uses_default_dictionary: bool,
    /// Char used to censor flagged spans.
    pub mask_char: char,
    /// SHA256 of the final word list: "sha256:{hex}".
    pub list_hash: String,
}

impl Config {
    /// Compile the configured word list into a scanner.
    pub fn scanner(&self) -> Result<WordScanner, ScanError> {
        WordScanner::new(&self.words)
    }
}
