mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use yojna_mitra::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
