// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while compiling a banned-word list. Scanning itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("banned word \"{word}\" is empty after folding")]
    EmptyWord { word: String },

    #[error("banned word \"{word}\" compiled to an invalid pattern \"{pattern}\": {source}")]
    InvalidPattern {
        word: String,
        pattern: String,
        source: regex::Error,
    },
}
