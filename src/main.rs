//! ReportBuddy
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use ReportBuddy::{
    config::Settings,
    database::{connection, DatabaseService},
    handlers::{self, AppState},
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the server
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", ReportBuddy::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = connection::DatabaseConfig {
        url: settings.database.url.clone(),
        max_connections: settings.database.max_connections,
        min_connections: settings.database.min_connections,
        acquire_timeout: Duration::from_secs(30),
        idle_timeout: Some(Duration::from_secs(600)),
        max_lifetime: Some(Duration::from_secs(1800)),
    };
    let db_pool = connection::create_pool(&db_config).await?;

    // Run database migrations
    connection::run_migrations(&db_pool).await?;

    // Initialize services
    info!("Initializing services...");
    let database_service = DatabaseService::new(db_pool.clone());
    let services = ServiceFactory::new(settings.clone(), database_service)?;

    let state = AppState {
        services: Arc::new(services),
        db_pool,
    };
    let app = handlers::router(state);

    let listener =
        tokio::net::TcpListener::bind((settings.server.host.as_str(), settings.server.port))
            .await?;
    info!("ReportBuddy listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    info!("ReportBuddy has been shut down.");

    Ok(())
}
