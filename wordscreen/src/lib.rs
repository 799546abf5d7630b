// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

pub mod config;
pub mod error;
pub mod evasion;
pub mod matcher;
pub mod normalize;
pub mod ranges;
pub mod scan;
pub mod wordlist;

pub use error::ScanError;
pub use scan::{scan, ContentScanner, Match, ScanResult, WordScanner};
pub use wordlist::Dictionary;
