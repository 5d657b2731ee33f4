//! SQS client construction and message publishing

pub mod sqs;

// Re-export the publish surface for convenience
pub use sqs::{send_canary, sqs_client};
