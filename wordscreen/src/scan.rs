// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

// Banned-word scanning: fold, match, condense, merge.
//
// A scan folds the text once, runs every compiled word over it, then checks
// the condensed text for evasion. Words hit by either pass are flagged; only
// the pattern pass yields spans. Scanners hold no mutable state, so one
// scanner can serve any number of threads.

use std::ops::Range;

use serde::Serialize;

use crate::error::ScanError;
use crate::evasion::CondensedText;
use crate::matcher::CompiledWord;
use crate::normalize::normalize;
use crate::ranges::merge_matches;
use crate::wordlist::prepare_words;

// ---------------------------------------------------------------------------
// Interface and types
// ---------------------------------------------------------------------------

/// A flagged span of the original input. `start..end` is a half-open byte
/// range on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

impl Match {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Result of scanning one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Merged, sorted, non-overlapping spans from the pattern pass.
    pub matches: Vec<Match>,
    /// Every listed word found by either pass, in word-list order.
    pub flagged_words: Vec<String>,
}

impl ScanResult {
    /// Whether the text should be rejected or held for moderation.
    pub fn is_flagged(&self) -> bool {
        !self.flagged_words.is_empty()
    }

    /// `text` with every matched span censored: each non-whitespace char in a
    /// span becomes one `mask_char`, whitespace inside a span is kept. Words
    /// flagged only by the condensed pass have no span and stay visible.
    pub fn mask(&self, text: &str, mask_char: char) -> String {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for m in &self.matches {
            let (Some(before), Some(hit)) = (text.get(cursor..m.start), text.get(m.range()))
            else {
                continue;
            };
            out.push_str(before);
            out.extend(
                hit.chars()
                    .map(|c| if c.is_whitespace() { c } else { mask_char }),
            );
            cursor = m.end;
        }
        out.push_str(text.get(cursor..).unwrap_or_default());
        out
    }
}

/// Scans user-submitted text for banned words.
pub trait ContentScanner: Send + Sync {
    fn scan(&self, text: &str) -> ScanResult;
}

// ---------------------------------------------------------------------------
// Implementation
// ---------------------------------------------------------------------------

/// Scanner over a prepared, pre-compiled word list.
#[derive(Debug, Clone, Default)]
pub struct WordScanner {
    words: Vec<CompiledWord>,
}

impl WordScanner {
    /// Prepare (lowercase, trim, dedupe) and compile `words`.
    ///
    /// Words that fold to nothing are skipped with a warning; a word whose
    /// pattern fails to compile is an error.
    pub fn new<I, S>(words: I) -> Result<Self, ScanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prepared = prepare_words(words);
        let mut compiled = Vec::with_capacity(prepared.len());
        for word in prepared {
            match CompiledWord::compile(&word) {
                Ok(c) => compiled.push(c),
                Err(ScanError::EmptyWord { word }) => {
                    tracing::warn!(%word, "banned word folds to nothing, skipped");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self { words: compiled })
    }

    /// Like [`WordScanner::new`], but any word that cannot be compiled is
    /// skipped instead of failing the whole list.
    pub fn lenient<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = prepare_words(words)
            .into_iter()
            .filter_map(|word| match CompiledWord::compile(&word) {
                Ok(c) => Some(c),
                Err(e) => {
                    tracing::warn!("banned word skipped: {e}");
                    None
                }
            })
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl ContentScanner for WordScanner {
    fn scan(&self, text: &str) -> ScanResult {
        let normalized = normalize(text);
        let condensed = CondensedText::new(&normalized);

        let mut hits = Vec::new();
        let mut flagged_words = Vec::new();
        for word in &self.words {
            let found = word.find_all(&normalized);
            let direct = !found.is_empty();
            hits.extend(found);
            if direct || condensed.contains_key(word.condensed_key()) {
                flagged_words.push(word.word.clone());
            }
        }

        let direct_hits = hits.len();
        let matches = merge_matches(hits);
        tracing::debug!(
            flagged = flagged_words.len(),
            direct_hits,
            spans = matches.len(),
            "scan complete"
        );

        ScanResult {
            matches,
            flagged_words,
        }
    }
}

/// One-shot scan of `text` against `words`.
///
/// Convenience for callers without a long-lived scanner; words that cannot be
/// compiled are skipped.
pub fn scan<S: AsRef<str>>(text: &str, words: &[S]) -> ScanResult {
    WordScanner::lenient(words).scan(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
