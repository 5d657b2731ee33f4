use sqs_canary::core::models::CanaryMessage;

#[test]
fn test_hello_body_is_byte_exact() {
    // Consumers assert on these exact bytes, so the serialization is pinned
    let body = serde_json::to_string(&CanaryMessage::hello()).unwrap();
    assert_eq!(body, "{\"message\":\"hello world\"}");
}

#[test]
fn test_message_parses_from_wire_body() {
    let msg: CanaryMessage = serde_json::from_str("{\"message\":\"hello world\"}").unwrap();
    assert_eq!(msg.message, "hello world");
}
