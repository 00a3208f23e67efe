use crate::signaling::SignalingOutput;
use axum::extract::ws::Message;
use dashmap::DashMap;
use glimpse_core::{ConnectionId, ServerMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

/// Maps live connections to the writer side of their WebSocket task.
///
/// Sends go into each connection's unbounded channel, so pushing a message
/// never waits on the receiver's socket.
#[derive(Clone, Default)]
pub struct SignalingService {
    peers: Arc<DashMap<ConnectionId, mpsc::UnboundedSender<Message>>>,
}

impl SignalingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_peer(&self, id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.peers.insert(id, tx);
    }

    pub fn remove_peer(&self, id: &ConnectionId) {
        self.peers.remove(id);
    }

    pub fn send_message(&self, id: &ConnectionId, msg: ServerMessage) {
        if let Some(peer) = self.peers.get(id) {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if let Err(e) = peer.send(Message::Text(json.into())) {
                        error!("Failed to send WS message to {}: {:?}", id, e);
                    }
                }
                Err(e) => error!("Failed to serialize server message: {}", e),
            }
        } else {
            warn!("Attempted to send to disconnected connection {}", id);
        }
    }
}

impl SignalingOutput for SignalingService {
    fn send(&self, target: &ConnectionId, msg: ServerMessage) {
        self.send_message(target, msg);
    }
}
