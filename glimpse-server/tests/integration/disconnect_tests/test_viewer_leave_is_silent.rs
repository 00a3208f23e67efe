use glimpse_core::{ConnectionId, ServerMessage};
use serde_json::json;

use crate::{create_relay, init_tracing};

#[test]
fn test_viewer_leave_is_silent() {
    init_tracing();

    let (relay, output) = create_relay();
    let host = ConnectionId::new();
    let viewer = ConnectionId::new();
    relay.register(host);
    relay.register(viewer);

    relay.join(host, "R1", true).expect("host join failed");
    relay.join(viewer, "R1", false).expect("viewer join failed");
    relay.leave(viewer, "R1");

    // Only the original join notice; a departing viewer is not announced.
    assert_eq!(
        output.sent_to(&host),
        vec![ServerMessage::UserJoined { id: viewer }]
    );

    // The membership really shrank: the host is alone again, so its next
    // signal is buffered instead of delivered.
    relay
        .signal(host, "R1", json!({"offer": "X"}))
        .expect("signal failed");
    assert!(output.sent_to(&viewer).is_empty());
}
