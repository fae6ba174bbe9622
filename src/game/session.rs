use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::{Scorer, WordValidator};
use crate::models::{RoundSnapshot, UsedWords, ValidationVerdict};
use crate::root_words::{RootWordSource, FALLBACK_ROOT_WORD, MIN_ROOT_WORD_LEN};
use crate::utils::normalize;

/// State of one player's game: the current root word, the words accepted
/// against it and the running score.
///
/// A session starts with no round. `submit` fails with
/// [`GameError::NoActiveRound`] until `start_round` succeeds once; after that
/// the round runs until the next `start_round` replaces it.
pub struct GameSession<D> {
    validator: WordValidator<D>,
    fallback: Option<String>,
    root_word: Option<String>,
    used_words: UsedWords,
    score: u32,
}

impl<D: Dictionary> GameSession<D> {
    /// Create a session that falls back to [`FALLBACK_ROOT_WORD`]
    pub fn new(validator: WordValidator<D>) -> Self {
        Self {
            validator,
            fallback: Some(FALLBACK_ROOT_WORD.to_string()),
            root_word: None,
            used_words: UsedWords::new(),
            score: 0,
        }
    }

    /// Create a session with a custom fallback root word, or none at all.
    pub fn with_fallback(
        validator: WordValidator<D>,
        fallback: Option<&str>,
    ) -> Result<Self, GameError> {
        let fallback = fallback.map(checked_root_word).transpose()?;
        Ok(Self {
            fallback,
            ..Self::new(validator)
        })
    }

    /// Begin a new round, discarding any round in progress.
    ///
    /// Uses the source's pick if it is long enough, otherwise the fallback.
    /// On error the previous round is left intact.
    pub fn start_round(&mut self, source: &dyn RootWordSource) -> Result<&str, GameError> {
        let root_word = source
            .pick_root_word()
            .and_then(|word| checked_root_word(&word).ok())
            .or_else(|| self.fallback.clone())
            .ok_or(GameError::NoRootWord)?;

        self.used_words.clear();
        self.score = 0;
        Ok(self.root_word.insert(root_word).as_str())
    }

    /// Submit a candidate word for the current round.
    ///
    /// Accepted words go to the front of the used list and add their length
    /// to the score. Rejections leave the session untouched.
    pub fn submit(&mut self, candidate: &str) -> Result<ValidationVerdict, GameError> {
        let root_word = self.root_word.as_deref().ok_or(GameError::NoActiveRound)?;
        let word = normalize(candidate);

        let verdict = self.validator.validate(&word, root_word, &self.used_words);
        if verdict.is_accepted() {
            self.score = self.score.saturating_add(Scorer::score_word(&word));
            self.used_words.push_front(word);
        }

        Ok(verdict)
    }

    pub fn is_in_round(&self) -> bool {
        self.root_word.is_some()
    }

    pub fn root_word(&self) -> Option<&str> {
        self.root_word.as_deref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn used_words(&self) -> &UsedWords {
        &self.used_words
    }

    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Current round as a plain value, or `None` before the first round
    pub fn snapshot(&self) -> Option<RoundSnapshot> {
        self.root_word.as_ref().map(|root_word| RoundSnapshot {
            root_word: root_word.clone(),
            score: self.score,
            used_words: self.used_words.to_vec(),
        })
    }
}

fn checked_root_word(word: &str) -> Result<String, GameError> {
    let word = normalize(word);
    if word.chars().count() < MIN_ROOT_WORD_LEN {
        return Err(GameError::RootWordTooShort {
            word,
            min: MIN_ROOT_WORD_LEN,
        });
    }
    Ok(word)
}
