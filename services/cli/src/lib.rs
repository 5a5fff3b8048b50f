mod cli;
mod demo;
mod infra;

use resume_relevance::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
