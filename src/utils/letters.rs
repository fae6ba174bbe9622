use std::collections::HashMap;

/// Normalize raw user input: trim surrounding whitespace, then lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Multiset of the letters available in a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: HashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every character of `word`, respecting multiplicity
    pub fn from_word(word: &str) -> Self {
        let mut counts = HashMap::new();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remove one occurrence of `ch`. Returns false if none is left.
    pub fn take(&mut self, ch: char) -> bool {
        match self.counts.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool without reusing a letter.
    /// The pool itself is left untouched.
    pub fn can_spell(&self, word: &str) -> bool {
        let mut pool = self.clone();
        word.chars().all(|ch| pool.take(ch))
    }

    /// Number of letters still available
    pub fn remaining(&self) -> usize {
        self.counts.values().sum()
    }

    /// Occurrences of `ch` still available
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }
}
