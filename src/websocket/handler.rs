use crate::{
    websocket::messages::{ClientMessage, ServerMessage},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;
use word_scramble::{Scorer, ValidationVerdict};

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays its own session.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let session_id = Uuid::new_v4();
    tracing::info!("WebSocket connection established, session {}", session_id);

    match state.new_session() {
        Ok(session) => {
            state.sessions.insert(session_id, session);
        }
        Err(e) => {
            tracing::error!("Failed to create session {}: {}", session_id, e);
            return;
        }
    }

    // Open with a fresh round
    for msg in apply_client_message(&state, session_id, ClientMessage::NewRound) {
        let _ = tx.send(msg).await;
    }

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let state_for_recv = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    let replies = match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => {
                            apply_client_message(&state_for_recv, session_id, client_msg)
                        }
                        Err(e) => {
                            tracing::error!("Failed to parse message: {}", e);
                            vec![ServerMessage::Error {
                                message: format!("Invalid message format: {}", e),
                            }]
                        }
                    };
                    for reply in replies {
                        if tx.send(reply).await.is_err() {
                            return;
                        }
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Client disconnected, session {}", session_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    state.sessions.remove(&session_id);
    tracing::info!("WebSocket connection closed, session {}", session_id);
}

/// Apply one client message to a session and build the replies.
///
/// The session entry is only held for the duration of this call, never across an await.
pub fn apply_client_message(
    state: &AppState,
    session_id: Uuid,
    msg: ClientMessage,
) -> Vec<ServerMessage> {
    let Some(mut session) = state.sessions.get_mut(&session_id) else {
        return vec![ServerMessage::Error {
            message: format!("Unknown session {}", session_id),
        }];
    };

    let mut replies = Vec::new();
    match msg {
        ClientMessage::NewRound => match session.start_round(&state.start_words) {
            Ok(root_word) => {
                tracing::debug!("Session {} started round with {}", session_id, root_word);
            }
            Err(e) => {
                tracing::warn!("Session {}: {}", session_id, e);
                return vec![ServerMessage::Error {
                    message: e.to_string(),
                }];
            }
        },
        ClientMessage::SubmitWord { word } => match session.submit(&word) {
            Ok(ValidationVerdict::Accepted) => {
                // Accepted words are stored normalized, newest first
                let word = session
                    .used_words()
                    .iter()
                    .next()
                    .unwrap_or_default()
                    .to_string();
                replies.push(ServerMessage::WordAccepted {
                    points: Scorer::score_word(&word),
                    word,
                    score: session.score(),
                });
            }
            Ok(verdict) => {
                // Empty submissions raise no alert and change nothing
                return verdict
                    .alert()
                    .map(|alert| ServerMessage::InvalidWord {
                        title: alert.title.to_string(),
                        message: alert.message.to_string(),
                    })
                    .into_iter()
                    .collect();
            }
            Err(e) => {
                return vec![ServerMessage::Error {
                    message: e.to_string(),
                }];
            }
        },
    }

    if let Some(snapshot) = session.snapshot() {
        replies.push(ServerMessage::round_state(&session_id.to_string(), snapshot));
    }
    replies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_state;

    fn connect(state: &AppState) -> Uuid {
        let session_id = Uuid::new_v4();
        state.sessions.insert(session_id, state.new_session().unwrap());
        session_id
    }

    #[test]
    fn test_new_round_sends_state() {
        let state = test_state(&["mouse"]);
        let id = connect(&state);

        let replies = apply_client_message(&state, id, ClientMessage::NewRound);
        assert!(matches!(
            replies.as_slice(),
            [ServerMessage::RoundState { root_word, score: 0, used_words, .. }]
                if root_word == "mouse" && used_words.is_empty()
        ));
    }

    #[test]
    fn test_submit_before_round() {
        let state = test_state(&["mouse"]);
        let id = connect(&state);

        let replies = apply_client_message(
            &state,
            id,
            ClientMessage::SubmitWord {
                word: "use".to_string(),
            },
        );
        assert!(matches!(replies.as_slice(), [ServerMessage::Error { .. }]));
    }

    #[test]
    fn test_accepted_word_reports_points_and_state() {
        let state = test_state(&["mouse"]);
        let id = connect(&state);
        apply_client_message(&state, id, ClientMessage::NewRound);

        let replies = apply_client_message(
            &state,
            id,
            ClientMessage::SubmitWord {
                word: " USE ".to_string(),
            },
        );
        assert!(matches!(
            replies.as_slice(),
            [
                ServerMessage::WordAccepted { word, points: 3, score: 3 },
                ServerMessage::RoundState { score: 3, .. },
            ] if word == "use"
        ));
    }

    #[test]
    fn test_rejection_sends_alert() {
        let state = test_state(&["mouse"]);
        let id = connect(&state);
        apply_client_message(&state, id, ClientMessage::NewRound);

        let replies = apply_client_message(
            &state,
            id,
            ClientMessage::SubmitWord {
                word: "mouse".to_string(),
            },
        );
        assert!(matches!(
            replies.as_slice(),
            [ServerMessage::InvalidWord { title, .. }] if title == "Word used already"
        ));
    }

    #[test]
    fn test_empty_submission_is_silent() {
        let state = test_state(&["mouse"]);
        let id = connect(&state);
        apply_client_message(&state, id, ClientMessage::NewRound);

        let replies = apply_client_message(
            &state,
            id,
            ClientMessage::SubmitWord {
                word: "   ".to_string(),
            },
        );
        assert!(replies.is_empty());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let state = test_state(&["mouse"]);
        let first = connect(&state);
        let second = connect(&state);
        apply_client_message(&state, first, ClientMessage::NewRound);
        apply_client_message(&state, second, ClientMessage::NewRound);

        let submit = || ClientMessage::SubmitWord {
            word: "use".to_string(),
        };
        apply_client_message(&state, first, submit());
        let replies = apply_client_message(&state, second, submit());
        assert!(matches!(
            replies.first(),
            Some(ServerMessage::WordAccepted { score: 3, .. })
        ));
    }

    #[test]
    fn test_unknown_session() {
        let state = test_state(&["mouse"]);
        let replies = apply_client_message(&state, Uuid::new_v4(), ClientMessage::NewRound);
        assert!(matches!(replies.as_slice(), [ServerMessage::Error { .. }]));
    }
}
