/*!
 * Buku API - HTTP CRUD service for Buku records
 *
 * Application entry point:
 * - load environment configuration
 * - construct the server
 * - run the HTTP service
 */

use buku_api::{config::Config, server::Server, AppResult};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = Config::from_env()?;

    let server = Server::new(config);

    server.run().await
}
