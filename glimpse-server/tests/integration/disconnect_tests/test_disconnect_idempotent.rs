use glimpse_core::{ConnectionId, ServerMessage};

use crate::{create_relay, init_tracing};

#[test]
fn test_disconnect_idempotent() {
    init_tracing();

    let (relay, output) = create_relay();
    let host = ConnectionId::new();
    let viewer = ConnectionId::new();
    relay.register(host);
    relay.register(viewer);

    relay.join(host, "R1", true).expect("host join failed");
    relay.join(viewer, "R1", false).expect("viewer join failed");

    // Explicit leave followed by the transport-level disconnect must not
    // produce a second notice.
    relay.leave(host, "R1");
    relay.disconnect(host);
    relay.disconnect(host);

    assert_eq!(
        output.sent_to(&viewer),
        vec![ServerMessage::UserDisconnected { id: host }]
    );
}
