pub mod game;

pub use game::{Alert, RoundSnapshot, UsedWords, ValidationVerdict};
