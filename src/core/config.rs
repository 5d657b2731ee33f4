use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub test_queue_url: String,
    pub test_queue_2_url: String,
    pub sqs_endpoint_url: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error naming the variable when a required queue URL is
    /// missing from the environment.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            test_queue_url: env::var("TEST_QUEUE_URL")
                .map_err(|e| format!("TEST_QUEUE_URL: {}", e))?,
            test_queue_2_url: env::var("TEST_QUEUE_2_URL")
                .map_err(|e| format!("TEST_QUEUE_2_URL: {}", e))?,
            sqs_endpoint_url: env::var("SQS_ENDPOINT_URL").ok(),
        })
    }
}
