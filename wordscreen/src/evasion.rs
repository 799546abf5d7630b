// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

// Condensed-text pass for spaced-out and stretched-letter evasion.
//
// The folded text is condensed (whitespace removed, identical runs collapsed)
// and each banned word's condensed key is looked up by plain substring
// containment. A hit here only flags the word: it has no precise position in
// the source, so it never contributes a match span. Containment is not
// boundary-aware, which is what lets "b a d w o r d" through to this pass.
// Each spelling of the folded text is condensed separately, so a `1` can line
// up as either `i` or `l`, but a plain `i` never stands in for `l`.

use crate::normalize::{condense, NormalizedText};

/// Condensed forms of a scanned text, one per spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondensedText(Vec<String>);

impl CondensedText {
    pub fn new(text: &NormalizedText) -> Self {
        Self(text.spellings().map(condensed_key).collect())
    }

    /// The condensed folded text.
    pub fn as_str(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    /// Whether any spelling contains a word's condensed key.
    pub fn contains_key(&self, key: &str) -> bool {
        !key.is_empty() && self.0.iter().any(|c| c.contains(key))
    }
}

/// Condense folded text or a folded word for containment checks.
pub fn condensed_key(folded: &str) -> String {
    condense(folded)
}
