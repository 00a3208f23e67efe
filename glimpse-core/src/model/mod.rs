mod connection;
mod message;

pub use connection::ConnectionId;
pub use message::{ClientMessage, ServerMessage};
