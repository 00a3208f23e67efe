use glimpse_core::ConnectionId;
use serde_json::Value;
use std::collections::VecDeque;

/// A signal that arrived while nobody else was in the room to receive it.
#[derive(Debug, Clone)]
pub struct PendingSignal {
    pub from: ConnectionId,
    pub data: Value,
}

/// One rendezvous room: the designated host, the broadcast group, and the
/// signals waiting for a second participant.
///
/// Existence is derived, never flagged: a room with no host and no members
/// is eligible for removal from the directory.
#[derive(Debug, Default)]
pub struct Room {
    host: Option<ConnectionId>,
    members: Vec<ConnectionId>,
    pending: VecDeque<PendingSignal>,
}

impl Room {
    pub fn host(&self) -> Option<ConnectionId> {
        self.host
    }

    pub fn is_host(&self, id: &ConnectionId) -> bool {
        self.host.as_ref() == Some(id)
    }

    pub fn is_member(&self, id: &ConnectionId) -> bool {
        self.members.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.members.is_empty()
    }

    /// Designate `id` as this room's host and add it to the broadcast
    /// group in one step, so no observer sees a host outside the group.
    pub fn set_host(&mut self, id: ConnectionId) {
        self.host = Some(id);
        self.add_member(id);
    }

    /// Drop the host designation if `id` holds it. Returns whether it did.
    pub fn clear_host(&mut self, id: &ConnectionId) -> bool {
        if self.is_host(id) {
            self.host = None;
            true
        } else {
            false
        }
    }

    pub fn add_member(&mut self, id: ConnectionId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    pub fn remove_member(&mut self, id: &ConnectionId) {
        self.members.retain(|m| m != id);
    }

    /// Everyone in the broadcast group except `id`.
    pub fn others(&self, id: &ConnectionId) -> impl Iterator<Item = &ConnectionId> {
        self.members.iter().filter(move |m| *m != id)
    }

    pub fn has_audience_for(&self, id: &ConnectionId) -> bool {
        self.others(id).next().is_some()
    }

    pub fn buffer_signal(&mut self, from: ConnectionId, data: Value) {
        self.pending.push_back(PendingSignal { from, data });
    }

    /// Hand the whole buffer, oldest first, to a new joiner. The buffer is
    /// empty afterwards.
    pub fn drain_pending(&mut self) -> Vec<PendingSignal> {
        self.pending.drain(..).collect()
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}
