// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

//! Scan latency benchmarks.
//!
//! Measures:
//! - Folding (leet, diacritics, boundaries) with the position map
//! - Full scans against the built-in dictionary, clean and flagged
//! - Scanner construction (pattern compilation)
//!
//! Run: cargo bench --bench scan_latency

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use wordscreen::normalize::normalize;
use wordscreen::{ContentScanner, Dictionary, WordScanner};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Short review (~50 bytes).
const SHORT_CLEAN: &str = "Explains things well and grades fairly.";

/// Review with leet and spacing evasion.
const EVASIVE: &str = "This teacher is a b a s t a r d and a total sh1t, b!tch";

/// Clean forum post of roughly `repeat * 45` bytes.
fn clean_post(repeat: usize) -> String {
    "The quick brown fox jumps over the lazy dog. ".repeat(repeat)
}

fn scanner() -> WordScanner {
    let dict = Dictionary::builtin().expect("built-in dictionary");
    WordScanner::new(dict.words()).expect("built-in dictionary compiles")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("ascii_short", |b| {
        b.iter(|| normalize(black_box(SHORT_CLEAN)));
    });

    group.bench_function("ascii_long", |b| {
        let content = clean_post(110);
        b.iter(|| normalize(black_box(&content)));
    });

    group.bench_function("accented_fullwidth", |b| {
        let content = "Crème brûlée \u{FF42}\u{FF41}\u{FF44} naïve façade";
        b.iter(|| normalize(black_box(content)));
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let scanner = scanner();

    group.bench_function("clean_short", |b| {
        b.iter(|| scanner.scan(black_box(SHORT_CLEAN)));
    });

    group.bench_function("evasive_short", |b| {
        b.iter(|| scanner.scan(black_box(EVASIVE)));
    });

    for repeat in [11usize, 110] {
        let content = clean_post(repeat);
        group.bench_with_input(
            BenchmarkId::new("clean_post", content.len()),
            &content,
            |b, content| b.iter(|| scanner.scan(black_box(content))),
        );
    }

    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let dict = Dictionary::builtin().expect("built-in dictionary");
    c.bench_function("compile_builtin_dictionary", |b| {
        b.iter(|| WordScanner::new(black_box(dict.words())));
    });
}

criterion_group!(benches, bench_normalize, bench_scan, bench_compile);
criterion_main!(benches);
