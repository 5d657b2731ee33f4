use serde::{Deserialize, Serialize};

/// Body published to each queue. Serializes to `{"message":"hello world"}`
/// for the fixture payload; consumers on the far side assert on those bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanaryMessage {
    pub message: String,
}

impl CanaryMessage {
    #[must_use]
    pub fn hello() -> Self {
        Self {
            message: "hello world".to_string(),
        }
    }
}
