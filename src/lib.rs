/// sqs-canary - a smoke-test Lambda that publishes a fixed payload to two SQS queues.
///
/// Each invocation sends `{"message":"hello world"}` to the two queues named by
/// `TEST_QUEUE_URL` and `TEST_QUEUE_2_URL`, in that order, then returns a
/// `{"statusCode": 200}` payload. The canary exists to prove that IAM
/// permissions, queue wiring, and the network path between a deployed Lambda
/// and its queues are live; the incoming event is ignored.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - The official AWS SDK for Rust (`aws-config` + `aws-sdk-sqs`) for all
///   credential resolution, signing, and transport concerns
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use lambda_runtime::{run, service_fn};
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     // Set up structured logging
///     sqs_canary::setup_logging();
///
///     // Run the canary handler
///     run(service_fn(sqs_canary::handler::handler)).await
/// }
/// ```
// Module declarations
pub mod core;
pub mod errors;
pub mod handler;
pub mod messaging;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// sqs_canary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
