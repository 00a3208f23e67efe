use glimpse_core::{ConnectionId, ServerMessage};
use glimpse_server::RelayError;
use serde_json::json;

use crate::{create_relay, init_tracing};

#[test]
fn test_second_host_rejected() {
    init_tracing();

    let (relay, output) = create_relay();
    let first = ConnectionId::new();
    let second = ConnectionId::new();
    relay.register(first);
    relay.register(second);

    relay.join(first, "R4", true).expect("first host join failed");

    let result = relay.join(second, "R4", true);
    assert_eq!(result, Err(RelayError::HostTaken("R4".to_string())));

    // The loser was not recorded as anything: it is not a member.
    let result = relay.signal(second, "R4", json!({"offer": "X"}));
    assert_eq!(result, Err(RelayError::NotInRoom("R4".to_string())));

    // The first host keeps relaying normally.
    let viewer = ConnectionId::new();
    relay.register(viewer);
    relay.join(viewer, "R4", false).expect("viewer join failed");

    assert_eq!(
        output.sent_to(&first),
        vec![ServerMessage::UserJoined { id: viewer }]
    );
    assert!(output.sent_to(&second).is_empty());
}
