// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

// Text folding for banned-word comparison.
//
// Every source char folds to zero or more comparable chars: compatibility
// decomposition with combining marks dropped, lowercase, then leet-speak
// substitution. Anything that is not a letter or digit becomes a boundary and
// runs of boundaries collapse to a single space. Each output char remembers the
// byte range of the source char it came from, so hits found in the folded text
// can be reported against the original input.
//
// The glyph `1` reads as either `i` or `l`. The folded text spells it `i`; when
// the input has any, an alternate spelling with `l` in exactly those positions
// is kept alongside. Both are ASCII at the same offsets, so one map serves both.

use std::ops::Range;

use unicode_normalization::char::{decompose_compatible, is_combining_mark};

// ---------------------------------------------------------------------------
// NormalizedText
// ---------------------------------------------------------------------------

/// Folded text plus the position map back to the source string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    /// `text` with every `i` folded from a `1` spelled `l` instead. Only
    /// present when it differs from `text`.
    alternate: Option<String>,
    /// One entry per char of `text`: (byte offset in `text`, source byte range).
    /// Both columns are non-decreasing.
    origins: Vec<(usize, Range<usize>)>,
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The alternate spelling for a `1`, if the input had one.
    pub fn alternate(&self) -> Option<&str> {
        self.alternate.as_deref()
    }

    /// Every spelling to search: the folded text, then the alternate. Offsets
    /// are interchangeable between them.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.text.as_str()).chain(self.alternate.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Translate a byte range of the folded text (as reported by a regex hit)
    /// into a byte range of the source string.
    ///
    /// The start comes from the first folded char, the end from the last
    /// folded char before `range.end`. Returns `None` for empty ranges or a
    /// start that does not fall on a folded char.
    pub fn source_span(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.is_empty() {
            return None;
        }
        let first = self
            .origins
            .binary_search_by_key(&range.start, |(o, _)| *o)
            .ok()?;
        let last = match self.origins.binary_search_by_key(&range.end, |(o, _)| *o) {
            Ok(i) | Err(i) => i.checked_sub(1)?,
        };
        if last < first {
            return None;
        }
        Some(self.origins[first].1.start..self.origins[last].1.end)
    }
}

// ---------------------------------------------------------------------------
// Folding
// ---------------------------------------------------------------------------

/// Fold `input` into its comparable form, keeping the map back to `input`.
pub fn normalize(input: &str) -> NormalizedText {
    let mut text = String::with_capacity(input.len());
    let mut alternate = String::with_capacity(input.len());
    let mut origins = Vec::with_capacity(input.len());

    for (start, ch) in input.char_indices() {
        let source = start..start + ch.len_utf8();
        fold_char(ch, &mut |c, alt| {
            if c == ' ' && text.ends_with(' ') {
                return;
            }
            origins.push((text.len(), source.clone()));
            text.push(c);
            alternate.push(alt);
        });
    }

    let alternate = (alternate != text).then_some(alternate);
    NormalizedText {
        text,
        alternate,
        origins,
    }
}

/// Fold a banned word the same way text is folded, trimmed of boundaries.
///
/// Words entered with accents, capitals or leet glyphs compare equal to
/// their plain form: `"B@D"` folds to `"bad"`.
pub fn fold_word(word: &str) -> String {
    normalize(word).as_str().trim().to_string()
}

/// Delete whitespace and collapse runs of identical chars to one.
pub fn condense(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    for ch in text.chars().filter(|c| !c.is_whitespace()) {
        if prev != Some(ch) {
            out.push(ch);
            prev = Some(ch);
        }
    }
    out
}

/// The letter a leet-speak glyph stands for.
pub fn leet(ch: char) -> Option<char> {
    match ch {
        '0' => Some('o'),
        '1' => Some('i'),
        '3' => Some('e'),
        '4' => Some('a'),
        '5' => Some('s'),
        '7' => Some('t'),
        '@' => Some('a'),
        '$' => Some('s'),
        '!' => Some('i'),
        _ => None,
    }
}

/// Emit the folded form of one source char with its alternate spelling. A
/// boundary is emitted as `' '`; invisible chars emit nothing so they cannot
/// split a word.
fn fold_char<F: FnMut(char, char)>(ch: char, emit: &mut F) {
    if is_invisible(ch) {
        return;
    }
    decompose_compatible(ch, |d| {
        if is_combining_mark(d) {
            return;
        }
        for lc in d.to_lowercase() {
            // Some lowercase mappings (e.g. U+0130) carry a combining mark.
            if is_combining_mark(lc) {
                continue;
            }
            let folded = fold_lowered(lc);
            let alt = if lc == '1' { 'l' } else { folded };
            emit(folded, alt);
        }
    });
}

fn fold_lowered(ch: char) -> char {
    if let Some(letter) = leet(ch) {
        letter
    } else if ch.is_alphanumeric() {
        ch
    } else {
        ' '
    }
}

/// Zero-width and invisible formatting characters.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' // Zero-width space
        | '\u{200C}' // Zero-width non-joiner
        | '\u{200D}' // Zero-width joiner
        | '\u{FEFF}' // BOM / zero-width no-break space
        | '\u{00AD}' // Soft hyphen
        | '\u{200E}' // Left-to-right mark
        | '\u{200F}' // Right-to-left mark
        | '\u{202A}'..='\u{202E}' // Bidi embeddings and overrides
        | '\u{2060}'..='\u{2064}' // Word joiner, invisible operators
        | '\u{FE00}'..='\u{FE0F}' // Variation selectors 1-16
        | '\u{180E}' // Mongolian vowel separator
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
