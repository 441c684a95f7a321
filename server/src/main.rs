use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use collab_server::config::{Config, StorageBackend};
use collab_server::{create_routes, AppState, MemStorage, PgStorage, Storage};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let storage: Arc<dyn Storage> = match &config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Arc::new(MemStorage::new())
        }
        StorageBackend::Postgres { database_url } => {
            let storage = PgStorage::connect(database_url, config.max_connections)
                .await
                .expect("Failed to connect to database");
            storage.migrate().await.expect("Failed to run migrations");
            storage
                .seed_if_empty()
                .await
                .expect("Failed to seed database");
            Arc::new(storage)
        }
    };

    let app = create_routes(AppState::new(storage));

    let addr = config.addr();
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
