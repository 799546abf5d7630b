// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::config::ConfigError;

/// The built-in banned-word dictionary, embedded at compile time.
const DEFAULT_BANNED_WORDS_YAML: &str = include_str!("../../schema/default_banned_words.yaml");

#[derive(serde::Deserialize)]
struct DefaultWordsYaml {
    banned_words: Vec<String>,
}

/// Lowercase, trim, drop empties and dedupe, keeping first-seen order.
pub fn prepare_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter_map(|w| {
            let w = w.as_ref().trim().to_lowercase();
            (!w.is_empty() && seen.insert(w.clone())).then_some(w)
        })
        .collect()
}

/// An immutable, prepared word list.
///
/// The built-in dictionary is loaded once by the caller at startup and passed
/// by reference to whatever assembles scanners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Parse the embedded default dictionary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml(DEFAULT_BANNED_WORDS_YAML)
    }

    /// Parse a dictionary document of the form `banned_words: [...]`.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: DefaultWordsYaml = serde_yaml::from_str(yaml)?;
        Ok(Self::from_words(raw.banned_words))
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: prepare_words(words),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// This dictionary followed by `extra`, prepared as one list.
    pub fn combine<I, S>(&self, extra: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        prepare_words(
            self.words
                .iter()
                .cloned()
                .chain(extra.into_iter().map(|w| w.as_ref().to_string())),
        )
    }
}
