mod analyze;
mod cli;
mod infra;
mod routes;
mod server;

use skinkit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
