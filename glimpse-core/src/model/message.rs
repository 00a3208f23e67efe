use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages an endpoint sends to the relay.
///
/// Signal payloads are untouched `serde_json::Value`s: the relay decides
/// who receives them and when, never what is inside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "d")]
pub enum ClientMessage {
    #[serde(rename = "join")]
    Join {
        room: String,
        #[serde(rename = "isHost")]
        is_host: bool,
    },
    #[serde(rename = "leave")]
    Leave { room: String },
    #[serde(rename = "signal")]
    Signal { room: String, data: Value },
    #[serde(rename = "pointerMove")]
    PointerMove { room: String, x: f64, y: f64 },
    #[serde(rename = "pointerClick")]
    PointerClick { room: String, button: String },
}

/// Messages the relay sends to endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "d")]
pub enum ServerMessage {
    /// Sent once right after the socket is upgraded, carrying the id the
    /// relay assigned to this connection.
    #[serde(rename = "welcome")]
    Welcome { id: ConnectionId },
    #[serde(rename = "error")]
    Error { message: String },
    /// A viewer tried to join a room that has no live host.
    #[serde(rename = "no-host")]
    NoHost { message: String },
    #[serde(rename = "user-joined")]
    UserJoined { id: ConnectionId },
    /// A relayed handshake payload, tagged with the sender's id.
    #[serde(rename = "signal")]
    Signal { id: ConnectionId, data: Value },
    #[serde(rename = "pointerMove")]
    PointerMove { x: f64, y: f64 },
    #[serde(rename = "pointerClick")]
    PointerClick { button: String },
    #[serde(rename = "user-disconnected")]
    UserDisconnected { id: ConnectionId },
}
