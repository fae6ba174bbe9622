//! Word-building game engine.
//!
//! A round picks a root word; the player submits words spelled from its
//! letters. [`WordValidator`] decides whether a submission is acceptable and
//! [`GameSession`] keeps the root word, accepted words and score.

pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod root_words;
pub mod utils;

pub use dictionary::{Dictionary, WordList};
pub use error::{GameError, WordListError};
pub use game::{GameSession, Scorer, WordValidator};
pub use models::{Alert, RoundSnapshot, UsedWords, ValidationVerdict};
pub use root_words::{RootWordSource, StartWords, FALLBACK_ROOT_WORD, MIN_ROOT_WORD_LEN};
