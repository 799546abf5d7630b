// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use crate::scan::Match;

/// Coalesce overlapping or touching half-open ranges.
///
/// Output is sorted by start and non-overlapping. A range whose start is at
/// or before the running end is folded into it.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for r in ranges {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    merged
}

/// Same merge as [`merge_ranges`], over matches.
///
/// A merged span keeps the word of the hit that opened it: the earliest start,
/// ties going to whichever hit came first in `matches`.
pub fn merge_matches(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by_key(|m| m.start);
    let mut merged: Vec<Match> = Vec::with_capacity(matches.len());
    for m in matches {
        match merged.last_mut() {
            Some(last) if m.start <= last.end => last.end = last.end.max(m.end),
            _ => merged.push(m),
        }
    }
    merged
}
