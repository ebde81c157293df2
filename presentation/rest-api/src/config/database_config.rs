use std::env;
use std::sync::Arc;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

/// `DATABASE_URL` value that selects the in-memory store.
pub const MEMORY_URL: &str = "memory";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string, or "memory" (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: migrations directory
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {}", raw))?,
            Err(_) => 5,
        };
        let migrations_path = env::var("MIGRATIONS_PATH")
            .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }

    pub fn is_memory(&self) -> bool {
        self.url == MEMORY_URL
    }
}

/// Opens the product store selected by `settings`
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<Arc<dyn ProductRepository>> {
    if settings.is_memory() {
        tracing::warn!("DATABASE_URL=memory: products are kept in process memory only");
        return Ok(Arc::new(ProductRepositoryInMemory::new()));
    }

    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;

    Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
}
