// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use super::error::ConfigError;

/// Where a word-list config comes from.
///
/// The loader needs the YAML text, plus a label naming the source in log
/// events and errors.
pub trait ConfigSource {
    fn load(&self) -> Result<String, ConfigError>;

    fn describe(&self) -> String;
}

/// A config file on disk, as passed to the CLI with `--config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<String, ConfigError> {
        std::fs::read_to_string(&self.path).map_err(|source| ConfigError::ConfigFile {
            path: self.describe(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Config YAML already held in memory, for callers that embed or generate
/// their word list instead of shipping a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSource {
    pub content: String,
}

impl From<&str> for StringSource {
    fn from(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl ConfigSource for StringSource {
    fn load(&self) -> Result<String, ConfigError> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "<inline config>".to_string()
    }
}
