use glimpse_core::{ConnectionId, ServerMessage};

/// Implemented by the transport layer so the relay can push messages to
/// endpoints without knowing how they are connected.
///
/// Deliveries must be non-blocking: a slow or unresponsive receiver is the
/// implementation's problem, never the relay's.
pub trait SignalingOutput: Send + Sync {
    /// Deliver `msg` to one connection. Best-effort; a target that is
    /// already gone is dropped silently.
    fn send(&self, target: &ConnectionId, msg: ServerMessage);
}
