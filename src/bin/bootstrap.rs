pub use sqs_canary::handler::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    sqs_canary::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
