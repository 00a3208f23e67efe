use glimpse_core::ConnectionId;
use glimpse_server::RelayError;
use serde_json::json;

use crate::{create_relay, init_tracing};

#[test]
fn test_signal_from_non_member_rejected() {
    init_tracing();

    let (relay, output) = create_relay();
    let host = ConnectionId::new();
    let outsider = ConnectionId::new();
    relay.register(host);
    relay.register(outsider);

    relay.join(host, "R1", true).expect("host join failed");

    let result = relay.signal(outsider, "R1", json!({"offer": "X"}));
    assert_eq!(result, Err(RelayError::NotInRoom("R1".to_string())));

    let result = relay.signal(outsider, "no-such-room", json!({"offer": "X"}));
    assert_eq!(result, Err(RelayError::NotInRoom("no-such-room".to_string())));

    // Nothing was forwarded and nothing was buffered for the host's room.
    assert!(output.all().is_empty());

    let viewer = ConnectionId::new();
    relay.register(viewer);
    relay.join(viewer, "R1", false).expect("viewer join failed");
    assert!(output.sent_to(&viewer).is_empty());
}
