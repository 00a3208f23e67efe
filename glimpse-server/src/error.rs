use thiserror::Error;

/// Rejections surfaced to the single offending connection. None of these
/// affect other rooms or connections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// A join without a usable room identifier.
    #[error("a room identifier is required")]
    MissingRoom,

    /// A host join into a room that already has a live host.
    #[error("room '{0}' already has a host")]
    HostTaken(String),

    /// A viewer join into a room with no live host. Endpoints may retry.
    #[error("no host in room '{0}'")]
    NoHost(String),

    /// A signal into a room the sender never joined.
    #[error("not a member of room '{0}'")]
    NotInRoom(String),
}
