// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

// Config loader and validator
//
// Loads wordscreen.yaml, validates it, resolves variable interpolation, reads
// plain-text word files, merges the built-in dictionary and computes a
// deterministic hash of the resulting word list.

mod error;
mod interpolation;
mod loader;
mod raw;
mod source;
mod types;

pub use error::ConfigError;
pub use interpolation::resolve_variables;
pub use loader::{compute_hash, load_config, parse_word_list};
pub use source::{ConfigSource, FileSource, StringSource};
pub use types::{Config, DEFAULT_MASK_CHAR};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
