use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::ConfigError;

/// Words dropped by the tokenizer when stopword removal is enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

/// On-disk stopword list: `{"words": ["dan", "di", ...]}`.
#[derive(Deserialize)]
struct StopwordFile {
    #[serde(default)]
    words: Vec<String>,
}

impl StopwordSet {
    /// Builds a set from a word list. Words are trimmed and lower-cased; blanks
    /// are skipped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads a JSON stopword file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let file: StopwordFile = serde_json::from_str(content)?;
        Ok(Self::new(file.words))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
