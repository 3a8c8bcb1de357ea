/*!
 * HTTP server module
 *
 * Starts and runs the HTTP server, coordinating component initialization:
 * - logging setup
 * - database connection and migrations
 * - router and middleware wiring
 * - listener bind and serve loop
 */

use crate::config::Config;
use crate::database::Database;
use crate::error::AppResult;
use crate::handlers::AppState;
use crate::logging;
use crate::routes::create_router;
use axum::serve;
use tokio::net::TcpListener;
use tracing::info;

pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full startup sequence and serves until the process stops.
    ///
    /// Any failure during startup (logging setup, database connection,
    /// migration, port bind) aborts the server with an error.
    pub async fn run(&self) -> AppResult<()> {
        logging::init_logging(&self.config.log_level).map_err(|e| {
            crate::error::AppError::Config(format!("Failed to initialize logging: {}", e))
        })?;

        info!("Starting Buku API v{}", env!("CARGO_PKG_VERSION"));
        info!("Log level: {}", self.config.log_level);

        info!(
            "Connecting to database: {}",
            // hide credentials, show host and database only
            self.config.database_url.split('@').next_back().unwrap_or("***")
        );
        let db = Database::new(&self.config.database_url).await?;
        info!("Database connection established");

        if self.config.auto_migrate {
            info!("Running database migrations (AUTO_MIGRATE=true)...");
            db.migrate().await?;
            info!("Database migrations completed successfully");
        } else {
            info!("Skipping database migrations (AUTO_MIGRATE=false)");
        }

        let state = AppState { db };
        let app = create_router(state);

        let addr = format!("{}:{}", self.config.server_host, self.config.server_port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            crate::error::AppError::Config(format!("Failed to bind to address {}: {}", addr, e))
        })?;

        info!("Server listening on http://{}", addr);
        info!("API Documentation:");
        info!("  GET    /            - Greeting");
        info!("  GET    /bukus       - List all books (with Penulis join)");
        info!("  GET    /buku?id=N   - Get one book by id");
        info!("  POST   /buku        - Create one book");
        info!("  POST   /bukus       - Create many books (atomic)");
        info!("  PUT    /buku/{{id}}   - Partially update a book");
        info!("  DELETE /buku/{{id}}   - Delete a book");

        serve(listener, app)
            .await
            .map_err(|e| crate::error::AppError::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }
}
