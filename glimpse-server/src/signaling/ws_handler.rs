use crate::AppState;
use crate::error::RelayError;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use glimpse_core::{ClientMessage, ConnectionId, ServerMessage};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let connection_id = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, connection_id, state))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId, state: AppState) {
    info!("New WebSocket connection: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.signaling.add_peer(connection_id, tx);
    state.relay.register(connection_id);
    state
        .signaling
        .send_message(&connection_id, ServerMessage::Welcome { id: connection_id });

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let state = state.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => handle_message(&state, connection_id, client_msg),
                        Err(e) => warn!("Invalid message from {}: {:?}", connection_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }

            state.relay.disconnect(connection_id);
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Cleanup is idempotent, so racing the recv task here is harmless.
    state.relay.disconnect(connection_id);
    state.signaling.remove_peer(&connection_id);
    info!("WebSocket disconnected: {}", connection_id);
}

fn handle_message(state: &AppState, connection_id: ConnectionId, msg: ClientMessage) {
    let result = match msg {
        ClientMessage::Join { room, is_host } => state.relay.join(connection_id, &room, is_host),
        ClientMessage::Signal { room, data } => state.relay.signal(connection_id, &room, data),
        ClientMessage::PointerMove { room, x, y } => {
            state.relay.pointer_move(connection_id, &room, x, y);
            Ok(())
        }
        ClientMessage::PointerClick { room, button } => {
            state.relay.pointer_click(connection_id, &room, button);
            Ok(())
        }
        ClientMessage::Leave { room } => {
            state.relay.leave(connection_id, &room);
            Ok(())
        }
    };

    if let Err(e) = result {
        let notice = match e {
            RelayError::NoHost(_) => ServerMessage::NoHost {
                message: e.to_string(),
            },
            _ => ServerMessage::Error {
                message: e.to_string(),
            },
        };
        state.signaling.send_message(&connection_id, notice);
    }
}
