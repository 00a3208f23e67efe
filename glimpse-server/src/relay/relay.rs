use crate::error::RelayError;
use crate::relay::room::{PendingSignal, Room};
use crate::signaling::SignalingOutput;
use dashmap::DashMap;
use glimpse_core::{ConnectionId, ServerMessage};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// The signaling relay: room directory, connection registry and pending
/// signal buffers.
///
/// Every mutation of a single room happens under that room's map entry
/// lock, so interleaved handlers never observe a torn state such as a host
/// recorded without its broadcast-group membership. Deliveries go through
/// [`SignalingOutput`], which must be non-blocking.
pub struct Relay {
    rooms: DashMap<String, Room>,
    connections: DashMap<ConnectionId, HashSet<String>>,
    output: Arc<dyn SignalingOutput>,
}

impl Relay {
    pub fn new(output: Arc<dyn SignalingOutput>) -> Self {
        Self {
            rooms: DashMap::new(),
            connections: DashMap::new(),
            output,
        }
    }

    /// Track a freshly upgraded connection.
    pub fn register(&self, id: ConnectionId) {
        self.connections.entry(id).or_default();
    }

    /// Handle `join(room, isHost)`.
    ///
    /// A connection already joined to `room` is ignored entirely: no
    /// duplicate group membership, no duplicate notices, regardless of the
    /// role flag it sends this time.
    pub fn join(&self, id: ConnectionId, room_id: &str, is_host: bool) -> Result<(), RelayError> {
        if room_id.is_empty() {
            return Err(RelayError::MissingRoom);
        }

        if is_host {
            self.join_as_host(id, room_id)?;
        } else {
            self.join_as_viewer(id, room_id)?;
        }

        self.connections
            .entry(id)
            .or_default()
            .insert(room_id.to_string());
        Ok(())
    }

    fn join_as_host(&self, id: ConnectionId, room_id: &str) -> Result<(), RelayError> {
        let mut room = self.rooms.entry(room_id.to_string()).or_default();

        if room.is_member(&id) {
            return Ok(());
        }
        if room.host().is_some() {
            return Err(RelayError::HostTaken(room_id.to_string()));
        }

        room.set_host(id);
        info!("Connection {} now hosts room '{}'", id, room_id);

        // Viewers stranded by a previous host learn the room is live again.
        for other in room.others(&id) {
            self.output.send(other, ServerMessage::UserJoined { id });
        }

        self.flush_pending(&mut room, &id);
        Ok(())
    }

    fn join_as_viewer(&self, id: ConnectionId, room_id: &str) -> Result<(), RelayError> {
        let Some(mut room) = self.rooms.get_mut(room_id) else {
            return Err(RelayError::NoHost(room_id.to_string()));
        };

        if room.is_member(&id) {
            return Ok(());
        }
        if room.host().is_none() {
            return Err(RelayError::NoHost(room_id.to_string()));
        }

        room.add_member(id);
        info!("Connection {} joined room '{}'", id, room_id);

        for other in room.others(&id) {
            self.output.send(other, ServerMessage::UserJoined { id });
        }

        self.flush_pending(&mut room, &id);
        Ok(())
    }

    fn flush_pending(&self, room: &mut Room, to: &ConnectionId) {
        for PendingSignal { from, data } in room.drain_pending() {
            self.output.send(to, ServerMessage::Signal { id: from, data });
        }
    }

    /// Handle `signal(room, payload)`: forward to every other member, or
    /// buffer when the sender is alone in the room.
    pub fn signal(&self, id: ConnectionId, room_id: &str, data: Value) -> Result<(), RelayError> {
        let Some(mut room) = self.rooms.get_mut(room_id) else {
            return Err(RelayError::NotInRoom(room_id.to_string()));
        };
        if !room.is_member(&id) {
            return Err(RelayError::NotInRoom(room_id.to_string()));
        }

        if room.has_audience_for(&id) {
            for other in room.others(&id) {
                self.output.send(
                    other,
                    ServerMessage::Signal {
                        id,
                        data: data.clone(),
                    },
                );
            }
        } else {
            debug!("Buffering signal from {} for room '{}'", id, room_id);
            room.buffer_signal(id, data);
        }
        Ok(())
    }

    /// Pointer input is ephemeral: forwarded when someone is listening,
    /// dropped otherwise. Never buffered, never replayed.
    pub fn pointer_move(&self, id: ConnectionId, room_id: &str, x: f64, y: f64) {
        self.forward_pointer(id, room_id, ServerMessage::PointerMove { x, y });
    }

    pub fn pointer_click(&self, id: ConnectionId, room_id: &str, button: String) {
        self.forward_pointer(id, room_id, ServerMessage::PointerClick { button });
    }

    fn forward_pointer(&self, id: ConnectionId, room_id: &str, msg: ServerMessage) {
        let Some(room) = self.rooms.get(room_id) else {
            return;
        };
        if !room.is_member(&id) {
            return;
        }
        for other in room.others(&id) {
            self.output.send(other, msg.clone());
        }
    }

    /// Handle an explicit `leave(room)`.
    pub fn leave(&self, id: ConnectionId, room_id: &str) {
        self.depart(&id, room_id);
        if let Some(mut joined) = self.connections.get_mut(&id) {
            joined.remove(room_id);
        }
    }

    /// Transport-level disconnect: visit every room this connection joined
    /// exactly once. Safe to call after an explicit leave, and safe to
    /// call twice.
    pub fn disconnect(&self, id: ConnectionId) {
        let Some((_, joined)) = self.connections.remove(&id) else {
            return;
        };
        for room_id in joined {
            self.depart(&id, &room_id);
        }
    }

    fn depart(&self, id: &ConnectionId, room_id: &str) {
        let mut emptied = false;

        if let Some(mut room) = self.rooms.get_mut(room_id) {
            if !room.is_member(id) {
                return;
            }
            room.remove_member(id);

            if room.clear_host(id) {
                // Stale handshakes must not leak into a future session.
                room.clear_pending();
                info!("Host {} left room '{}'", id, room_id);

                for other in room.others(id) {
                    self.output
                        .send(other, ServerMessage::UserDisconnected { id: *id });
                }
            } else {
                debug!("Connection {} left room '{}'", id, room_id);
            }

            emptied = room.is_empty();
        }

        if emptied {
            self.rooms.remove_if(room_id, |_, room| room.is_empty());
        }
    }
}
