// Copyright 2026 The Wordscreen Project
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wordscreen::config::{self, FileSource};
use wordscreen::{ContentScanner, Dictionary, WordScanner};

#[derive(Parser)]
#[command(name = "wordscreen", about = "Scan text for banned words")]
struct Cli {
    /// Path to a wordscreen.yaml config file. Without one, only the built-in
    /// dictionary is used.
    #[arg(long, env = "WORDSCREEN_CONFIG")]
    config: Option<PathBuf>,

    /// Extra banned word (repeatable)
    #[arg(long = "word")]
    words: Vec<String>,

    /// Print the text with flagged spans masked instead of the JSON result
    #[arg(long, default_value_t = false)]
    mask: bool,

    /// Text to scan. Read from stdin when omitted.
    text: Option<String>,
}

const EXIT_FLAGGED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let dictionary = match Dictionary::builtin() {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("failed to load built-in dictionary: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (words, mask_char) = match &cli.config {
        Some(path) => {
            let source = FileSource::new(path);
            match config::load_config(&source, &dictionary) {
                Ok(c) => {
                    tracing::info!(
                        words = c.words.len(),
                        default_dictionary = c.uses_default_dictionary,
                        list_hash = %c.list_hash,
                        "config loaded"
                    );
                    (c.words, c.mask_char)
                }
                Err(e) => {
                    tracing::error!("failed to load config {}: {e}", path.display());
                    return ExitCode::from(EXIT_ERROR);
                }
            }
        }
        None => (dictionary.words().to_vec(), config::DEFAULT_MASK_CHAR),
    };

    let scanner = match WordScanner::new(words.iter().chain(cli.words.iter())) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to compile word list: {e}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let text = match cli.text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                tracing::error!("failed to read stdin: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
            buf
        }
    };

    let result = scanner.scan(&text);

    if cli.mask {
        println!("{}", result.mask(&text, mask_char));
    } else {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("failed to serialize result: {e}");
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if result.is_flagged() {
        ExitCode::from(EXIT_FLAGGED)
    } else {
        ExitCode::SUCCESS
    }
}
