use rand::seq::IndexedRandom;
use std::path::Path;
use tokio::fs;

use crate::error::WordListError;
use crate::utils::normalize;

/// Root word used when the source yields nothing
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Shortest root word that still admits a game
pub const MIN_ROOT_WORD_LEN: usize = 3;

/// Supplies one root word per round.
pub trait RootWordSource: Send + Sync {
    fn pick_root_word(&self) -> Option<String>;
}

/// Fixed list of candidate root words, drawn at random.
#[derive(Debug, Clone, Default)]
pub struct StartWords {
    words: Vec<String>,
}

impl StartWords {
    /// Load a newline-delimited start word list from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| WordListError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let list = Self::from_words(content.lines());
        if list.is_empty() {
            tracing::warn!("No usable start words in {}", path.display());
        } else {
            tracing::info!("Loaded {} start words from {}", list.len(), path.display());
        }

        Ok(list)
    }

    /// Build from an iterator. Entries are normalized and anything shorter than
    /// [`MIN_ROOT_WORD_LEN`] letters is dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| word.chars().count() >= MIN_ROOT_WORD_LEN)
            .collect();

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl RootWordSource for StartWords {
    fn pick_root_word(&self) -> Option<String> {
        self.words.choose(&mut rand::rng()).cloned()
    }
}
