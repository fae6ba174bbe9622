pub mod letters;

pub use letters::{normalize, LetterPool};
