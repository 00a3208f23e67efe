pub mod test_disconnect_idempotent;
pub mod test_viewer_leave_is_silent;
