use serde::{Deserialize, Serialize};
use word_scramble::RoundSnapshot;

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Discard the current round and draw a new root word
    NewRound,
    SubmitWord {
        word: String,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoundState {
        session_id: String,
        root_word: String,
        score: u32,
        used_words: Vec<String>,
    },
    WordAccepted {
        word: String,
        points: u32,
        score: u32,
    },
    InvalidWord {
        title: String,
        message: String,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn round_state(session_id: &str, snapshot: RoundSnapshot) -> Self {
        ServerMessage::RoundState {
            session_id: session_id.to_string(),
            root_word: snapshot.root_word,
            score: snapshot.score,
            used_words: snapshot.used_words,
        }
    }
}
