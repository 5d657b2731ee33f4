use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanaryError {
    #[error("Failed to serialize message body: {0}")]
    SerializationError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),
}

impl From<serde_json::Error> for CanaryError {
    fn from(error: serde_json::Error) -> Self {
        CanaryError::SerializationError(error.to_string())
    }
}
