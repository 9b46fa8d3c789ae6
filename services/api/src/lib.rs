mod infra;
mod routes;
mod server;

use lovematch::error::AppError;

/// Loads configuration from the environment and serves the scoring API.
pub async fn run() -> Result<(), AppError> {
    server::run().await
}
