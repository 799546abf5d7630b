// Raw YAML deserialization types (internal)
// Kept apart from the public Config because word lists go through variable
// interpolation, file loading and preparation between the two.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawConfig {
    pub wordscreen: String,
    #[serde(default)]
    pub banned_words: Vec<String>,
    /// Plain-text word lists, one word per line.
    #[serde(default)]
    pub banned_word_files: Vec<String>,
    /// If false, skip the built-in dictionary. Default: true.
    pub use_default_dictionary: Option<bool>,
    pub mask_char: Option<String>,
}
