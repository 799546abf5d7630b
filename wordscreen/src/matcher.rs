// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use regex::Regex;

use crate::error::ScanError;
use crate::evasion::condensed_key;
use crate::normalize::{fold_word, NormalizedText};
use crate::scan::Match;

/// Build the regex source for one folded banned word.
///
/// Metacharacters are escaped, internal whitespace runs become `\s+`, and both
/// ends are anchored on word boundaries so the word never matches inside a
/// longer word.
pub fn compile_word_pattern(word: &str) -> String {
    let tokens: Vec<String> = word.split_whitespace().map(regex::escape).collect();
    format!(r"(?i)\b{}\b", tokens.join(r"\s+"))
}

/// A banned word with its pre-compiled pattern. Wraps `regex::Regex` with the
/// listed word and pattern source preserved for reporting.
#[derive(Clone)]
pub struct CompiledWord {
    /// The word as listed (lowercased, trimmed). This is what gets reported.
    pub word: String,
    /// The word after folding, as compared against folded text.
    pub folded: String,
    pub pattern: String,
    regex: Regex,
    condensed: String,
}

impl CompiledWord {
    /// Fold and compile a banned word.
    ///
    /// Fails with `ScanError::EmptyWord` when nothing comparable is left after
    /// folding (e.g. a word made only of punctuation).
    pub fn compile(word: &str) -> Result<Self, ScanError> {
        let folded = fold_word(word);
        if folded.is_empty() {
            return Err(ScanError::EmptyWord {
                word: word.to_string(),
            });
        }
        let pattern = compile_word_pattern(&folded);
        let regex = Regex::new(&pattern).map_err(|e| ScanError::InvalidPattern {
            word: word.to_string(),
            pattern: pattern.clone(),
            source: e,
        })?;
        Ok(Self {
            word: word.to_string(),
            condensed: condensed_key(&folded),
            folded,
            pattern,
            regex,
        })
    }

    /// Every hit in `text`, reported in source coordinates and sorted.
    ///
    /// Both spellings of the text are searched; a span found in both is
    /// reported once.
    pub fn find_all(&self, text: &NormalizedText) -> Vec<Match> {
        let mut spans: Vec<_> = text
            .spellings()
            .flat_map(|spelling| self.regex.find_iter(spelling))
            .filter_map(|m| text.source_span(m.range()))
            .map(|span| (span.start, span.end))
            .collect();
        spans.sort_unstable();
        spans.dedup();
        spans
            .into_iter()
            .map(|(start, end)| Match {
                word: self.word.clone(),
                start,
                end,
            })
            .collect()
    }

    /// Key compared against condensed text by the evasion pass.
    pub fn condensed_key(&self) -> &str {
        &self.condensed
    }
}

impl fmt::Debug for CompiledWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledWord")
            .field("word", &self.word)
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl PartialEq for CompiledWord {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.pattern == other.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn spans(word: &str, text: &str) -> Vec<(usize, usize)> {
        CompiledWord::compile(word)
            .unwrap()
            .find_all(&normalize(text))
            .into_iter()
            .map(|m| (m.start, m.end))
            .collect()
    }

    // -------------------------------------------------------------------
    // Pattern compiler
    // -------------------------------------------------------------------

    #[test]
    fn single_word_anchored_on_boundaries() {
        assert_eq!(compile_word_pattern("badword"), r"(?i)\bbadword\b");
    }

    #[test]
    fn internal_whitespace_becomes_one_or_more() {
        assert_eq!(
            compile_word_pattern("go  away"),
            r"(?i)\bgo\s+away\b"
        );
    }

    #[test]
    fn metacharacters_escaped() {
        assert_eq!(compile_word_pattern("c++"), r"(?i)\bc\+\+\b");
        assert_eq!(compile_word_pattern("a.b"), r"(?i)\ba\.b\b");
    }

    #[test]
    fn letters_compiled_literally() {
        assert_eq!(compile_word_pattern("hell"), r"(?i)\bhell\b");
    }

    // -------------------------------------------------------------------
    // Compilation
    // -------------------------------------------------------------------

    #[test]
    fn punctuation_only_word_rejected() {
        assert!(matches!(
            CompiledWord::compile("..."),
            Err(ScanError::EmptyWord { .. })
        ));
        assert!(matches!(
            CompiledWord::compile(""),
            Err(ScanError::EmptyWord { .. })
        ));
    }

    #[test]
    fn listed_word_kept_for_reporting() {
        let w = CompiledWord::compile("b@dw0rd").unwrap();
        assert_eq!(w.word, "b@dw0rd");
        assert_eq!(w.folded, "badword");
        assert_eq!(w.find_all(&normalize("such a badword")).len(), 1);
    }

    // -------------------------------------------------------------------
    // Scanning
    // -------------------------------------------------------------------

    #[test]
    fn every_occurrence_reported_in_source_coordinates() {
        assert_eq!(
            spans("badword", "You are a BADWORD, badword."),
            vec![(10, 17), (19, 26)]
        );
    }

    #[test]
    fn word_inside_longer_word_not_matched() {
        assert!(spans("hell", "hello world").is_empty());
        assert!(spans("class", "classroom").is_empty());
    }

    #[test]
    fn leet_text_matches_plain_word() {
        assert_eq!(spans("hello", "h3110"), vec![(0, 5)]);
    }

    #[test]
    fn one_read_as_l_in_either_spelling() {
        assert_eq!(spans("hell", "he11 no"), vec![(0, 4)]);
        assert_eq!(spans("hill", "hi11"), vec![(0, 4)]);
    }

    #[test]
    fn plain_i_never_read_as_l() {
        assert!(spans("hell", "heii").is_empty());
        assert!(spans("lame", "iame").is_empty());
    }

    #[test]
    fn span_found_in_both_spellings_reported_once() {
        // "1" folds to "i" and reads as "l": "1ce" hits "ice" only through
        // the folded text, but the plain "ice" after it hits through both.
        assert_eq!(spans("ice", "1ce and ice"), vec![(0, 3), (8, 11)]);
    }

    #[test]
    fn spacing_variants_tolerated() {
        assert_eq!(spans("go away", "go     away"), vec![(0, 11)]);
        assert_eq!(spans("go away", "go-away"), vec![(0, 7)]);
    }

    #[test]
    fn accented_text_span_covers_multibyte_chars() {
        let text = "Bádwörd";
        let found = spans("badword", text);
        assert_eq!(found, vec![(0, 9)]);
        assert_eq!(&text[0..9], text);
    }

    #[test]
    fn zero_width_split_word_still_matched() {
        let text = "bad\u{200B}word";
        assert_eq!(spans("badword", text), vec![(0, text.len())]);
    }
}
