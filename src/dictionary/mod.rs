use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;

use crate::error::WordListError;
use crate::utils::normalize;

/// Answers whether a string is a recognized word in a given language.
///
/// Implementations can be backed by an embedded word list, a file, or an
/// external spell-checking service. Callers must not assume lookups are cheap.
pub trait Dictionary: Send + Sync {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

impl<T: Dictionary + ?Sized> Dictionary for Arc<T> {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

/// In-memory word set for a single language
#[derive(Debug, Clone)]
pub struct WordList {
    language: String,
    words: HashSet<String>,
}

impl WordList {
    /// Load a newline-delimited word list from a file
    pub async fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| WordListError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let list = Self::from_words(content.lines(), language);
        tracing::info!(
            "Loaded {} words into {} dictionary from {}",
            list.len(),
            list.language,
            path.display()
        );

        Ok(list)
    }

    pub fn from_words<I, S>(words: I, language: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Create an empty dictionary that recognizes nothing
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            words: HashSet::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.words.contains(&normalize(word))
    }
}
