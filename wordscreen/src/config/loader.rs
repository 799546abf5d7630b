// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

use sha2::{Digest, Sha256};

use crate::wordlist::{prepare_words, Dictionary};

use super::error::ConfigError;
use super::interpolation::resolve_variables;
use super::raw;
use super::source::ConfigSource;
use super::types::{Config, DEFAULT_MASK_CHAR};

/// Load and validate a wordscreen config from the given source.
///
/// Steps:
/// 1. Read raw YAML from source
/// 2. Parse YAML into raw deserialization types
/// 3. Validate version and mask char
/// 4. Resolve variable interpolation in words and word file paths
/// 5. Read word files
/// 6. Combine with `dictionary` (unless disabled) and prepare the final list
/// 7. Hash the final list
pub fn load_config(
    source: &dyn ConfigSource,
    dictionary: &Dictionary,
) -> Result<Config, ConfigError> {
    tracing::debug!(source = %source.describe(), "loading wordscreen config");
    let raw_yaml = source.load()?;
    let raw: raw::RawConfig = serde_yaml::from_str(&raw_yaml)?;

    if raw.wordscreen != "v1" {
        return Err(ConfigError::Validation(format!(
            "unsupported config version \"{}\", expected \"v1\"",
            raw.wordscreen
        )));
    }

    let mask_char = parse_mask_char(raw.mask_char.as_deref())?;

    let mut configured = raw
        .banned_words
        .iter()
        .map(|w| resolve_variables(w))
        .collect::<Result<Vec<_>, _>>()?;
    for path in &raw.banned_word_files {
        let path = resolve_variables(path)?;
        configured.extend(read_word_file(&path)?);
    }

    let uses_default_dictionary = raw.use_default_dictionary != Some(false);
    let words = if uses_default_dictionary {
        dictionary.combine(configured)
    } else {
        prepare_words(configured)
    };
    if words.is_empty() {
        tracing::warn!("banned word list is empty, nothing will be flagged");
    }

    let list_hash = compute_hash(&words);

    Ok(Config {
        version: raw.wordscreen,
        words,
        uses_default_dictionary,
        mask_char,
        list_hash,
    })
}

/// Deterministic fingerprint of a prepared word list.
pub fn compute_hash(words: &[String]) -> String {
    let mut hasher = Sha256::new();
    for word in words {
        hasher.update(word.as_bytes());
        hasher.update(b"\n");
    }
    let hash = hasher.finalize();
    format!("sha256:{:x}", hash)
}

/// Parse a plain-text word list: one word per line, blank lines and `#`
/// comments ignored.
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn read_word_file(path: &str) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::WordFile {
        path: path.to_string(),
        source: e,
    })?;
    Ok(parse_word_list(&content))
}

fn parse_mask_char(raw: Option<&str>) -> Result<char, ConfigError> {
    let Some(s) = raw else {
        return Ok(DEFAULT_MASK_CHAR);
    };
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::Validation(format!(
            "mask_char must be exactly one character, got \"{s}\""
        ))),
    }
}
