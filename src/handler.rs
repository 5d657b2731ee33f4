//! Canary Lambda handler - publishes the fixture payload to both test queues.

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::{config::AppConfig, models::CanaryMessage};
use crate::messaging::sqs;

pub use self::function_handler as handler;

/// Returns the Lambda success payload.
#[must_use]
pub fn ok_response() -> Value {
    json!({ "statusCode": 200 })
}

/// Lambda handler for the canary entrypoint.
///
/// Sends one `{"message":"hello world"}` body to each of the two configured
/// queues, in order, then reports success. The incoming event payload is
/// logged but otherwise ignored; the canary behaves the same for any trigger.
///
/// # Errors
///
/// Returns an error to the runtime if configuration is incomplete or either
/// send fails. The first failed send short-circuits the second.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!("Canary Lambda received request: {:?}", event.payload);

    let client = sqs::sqs_client(&config).await;
    let msg = CanaryMessage::hello();

    sqs::send_canary(&client, &config.test_queue_url, &msg).await?;
    sqs::send_canary(&client, &config.test_queue_2_url, &msg).await?;

    Ok(ok_response())
}
