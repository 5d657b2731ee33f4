use sqs_canary::core::models::CanaryMessage;
use sqs_canary::errors::CanaryError;
use std::error::Error;

#[test]
fn test_canary_error_implements_error_trait() {
    // Verify CanaryError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = CanaryError::AwsError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_canary_error_display() {
    // Verify Display implementation works correctly
    let error = CanaryError::AwsError("send failed".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS services: send failed"
    );

    let error = CanaryError::SerializationError("bad body".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to serialize message body: bad body"
    );
}

#[test]
fn test_canary_error_from_serde_json() {
    // Conversion from serde_json::Error lands in the serialization variant
    let err = serde_json::from_str::<CanaryMessage>("not json").unwrap_err();
    let canary_err: CanaryError = err.into();

    match canary_err {
        CanaryError::SerializationError(msg) => assert!(!msg.is_empty()),
        CanaryError::AwsError(_) => panic!("Unexpected error type"),
    }
}
