use super::*;

#[test]
fn submit_label_reflects_pending_state() {
    assert_eq!(submit_label(false), "Create account");
    assert_eq!(submit_label(true), "Creating account...");
}
