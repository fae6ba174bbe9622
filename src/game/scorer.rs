pub struct Scorer;

impl Scorer {
    /// Points for an accepted word: one per character
    pub fn score_word(word: &str) -> u32 {
        u32::try_from(word.chars().count()).unwrap_or(u32::MAX)
    }
}
