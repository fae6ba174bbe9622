use crate::dictionary::Dictionary;
use crate::models::{UsedWords, ValidationVerdict};
use crate::utils::{normalize, LetterPool};

/// Default language tag handed to the dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

pub struct WordValidator<D> {
    dictionary: D,
    language: String,
}

impl<D: Dictionary> WordValidator<D> {
    pub fn new(dictionary: D) -> Self {
        Self::with_language(dictionary, DEFAULT_LANGUAGE)
    }

    pub fn with_language(dictionary: D, language: &str) -> Self {
        Self {
            dictionary,
            language: language.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Validate a candidate against the root word and the words already accepted.
    ///
    /// Rules are checked in a fixed order and the first failure wins:
    /// empty, original, possible, real.
    pub fn validate(
        &self,
        candidate: &str,
        root_word: &str,
        used_words: &UsedWords,
    ) -> ValidationVerdict {
        let word = normalize(candidate);
        let root_word = normalize(root_word);

        if word.is_empty() {
            return ValidationVerdict::RejectedEmpty;
        }

        if !Self::is_original(&word, &root_word, used_words) {
            return ValidationVerdict::RejectedDuplicateOrRoot;
        }

        if !Self::is_possible(&word, &root_word) {
            return ValidationVerdict::RejectedImpossibleLetters;
        }

        // Last, since the dictionary may be slow or remote
        if !self.is_real(&word) {
            return ValidationVerdict::RejectedNotARealWord;
        }

        ValidationVerdict::Accepted
    }

    /// Not yet accepted this round, and not the root word itself
    pub fn is_original(word: &str, root_word: &str, used_words: &UsedWords) -> bool {
        !used_words.contains(word) && word != root_word
    }

    /// Every letter of `word` matches a distinct letter of `root_word`
    pub fn is_possible(word: &str, root_word: &str) -> bool {
        LetterPool::from_word(root_word).can_spell(word)
    }

    pub fn is_real(&self, word: &str) -> bool {
        self.dictionary.is_recognized_word(word, &self.language)
    }
}
