use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// Outcome of validating one candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationVerdict {
    Accepted,
    /// Nothing left after trimming. Presented silently.
    RejectedEmpty,
    /// Already accepted this round, or the root word itself
    RejectedDuplicateOrRoot,
    /// Needs a letter the root word doesn't have (or has too few of)
    RejectedImpossibleLetters,
    RejectedNotARealWord,
}

/// Title/message pair shown to the player for a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl ValidationVerdict {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The alert a UI should raise for this verdict, if any.
    /// Accepted words and empty submissions raise nothing.
    pub fn alert(self) -> Option<Alert> {
        match self {
            Self::Accepted | Self::RejectedEmpty => None,
            Self::RejectedDuplicateOrRoot => Some(Alert {
                title: "Word used already",
                message: "Be more original.",
            }),
            Self::RejectedImpossibleLetters => Some(Alert {
                title: "Word not possible",
                message: "That word can't be spelled from the root word.",
            }),
            Self::RejectedNotARealWord => Some(Alert {
                title: "Word not recognized",
                message: "You can't just make them up, you know!",
            }),
        }
    }
}

/// Words accepted during the current round, most recent first
#[derive(Debug, Clone, Default)]
pub struct UsedWords {
    order: VecDeque<String>,
    seen: HashSet<String>,
}

impl UsedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Record a newly accepted word at the front. Returns false if it was already present.
    pub fn push_front(&mut self, word: String) -> bool {
        if !self.seen.insert(word.clone()) {
            return false;
        }
        self.order.push_front(word);
        true
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.order.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for UsedWords {
    /// Builds in acceptance order, so the last item ends up first
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut used = Self::new();
        for word in iter {
            used.push_front(word.into());
        }
        used
    }
}

/// Read-only view of a round for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub root_word: String,
    pub score: u32,
    pub used_words: Vec<String>,
}
