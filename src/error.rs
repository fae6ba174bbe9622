use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a game session.
///
/// Rejected words are not errors; they come back as a
/// [`ValidationVerdict`](crate::game::ValidationVerdict).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// `submit` was called before the first `start_round`.
    #[error("no active round; start a round first")]
    NoActiveRound,

    /// The root-word source produced nothing usable and no fallback is configured.
    #[error("no root word available and no fallback configured")]
    NoRootWord,

    /// A configured fallback root word is too short to play with.
    #[error("root word '{word}' is too short (minimum {min} letters)")]
    RootWordTooShort { word: String, min: usize },
}

/// Errors raised while loading a newline-delimited word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
