use super::*;

#[test]
fn submit_always_acknowledges() {
    let ack = submit(&ContactMessage::default()).unwrap();
    assert_eq!(ack.message, "Thanks! I'll get back to you soon.");
}

#[test]
fn submit_greets_by_trimmed_name() {
    let msg = ContactMessage {
        name: "  Sam ".into(),
        email: "sam@example.com".into(),
        message: "Hi there".into(),
    };
    let ack = submit(&msg).unwrap();
    assert_eq!(ack.message, "Thanks, Sam! I'll get back to you soon.");
}
