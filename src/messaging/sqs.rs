use aws_sdk_sqs::Client as SqsClient;
use tracing::info;

use crate::core::{config::AppConfig, models::CanaryMessage};
use crate::errors::CanaryError;

/// Builds an SQS client from the shared environment config.
///
/// When `SQS_ENDPOINT_URL` is set the override is applied at the loader, so
/// the same binary can be pointed at LocalStack or ElasticMQ in integration
/// environments. Everything else (credentials, region, signing, retries) is
/// the SDK's default chain.
pub async fn sqs_client(config: &AppConfig) -> SqsClient {
    let mut loader = aws_config::from_env();
    if let Some(endpoint) = config.sqs_endpoint_url.as_deref() {
        loader = loader.endpoint_url(endpoint);
    }
    let shared_config = loader.load().await;
    SqsClient::new(&shared_config)
}

/// Publishes one canary message to the given queue and returns its SQS
/// message id (empty if the service omitted one).
///
/// # Errors
///
/// Returns an error if serialization fails or the message cannot be sent to SQS.
pub async fn send_canary(
    client: &SqsClient,
    queue_url: &str,
    msg: &CanaryMessage,
) -> Result<String, CanaryError> {
    let message_body = serde_json::to_string(msg)?;

    let out = client
        .send_message()
        .queue_url(queue_url)
        .message_body(message_body)
        .send()
        .await
        .map_err(|e| CanaryError::AwsError(format!("Failed to send message to SQS: {e}")))?;

    let message_id = out.message_id().unwrap_or_default().to_string();
    info!(queue_url = %queue_url, message_id = %message_id, "sent canary message");
    Ok(message_id)
}
