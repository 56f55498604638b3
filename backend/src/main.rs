//! User service entry point: loads settings, prepares storage and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServiceSettings, create_server};
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

/// Build the pool and bring the schema up to date.
async fn prepare_database(settings: &ServiceSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.skip_migrations {
        warn!("skipping database migrations");
    } else {
        let migration_url = url.to_owned();
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
            .await
            .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
            .map_err(std::io::Error::other)?;
        info!(applied = applied.len(), "database schema is current");
    }

    let config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
    DbPool::new(config).await.map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load()
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        let pool = prepare_database(&settings, url).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr(), "starting user service");
    let server = create_server(health_state, config)?;
    server.await
}
