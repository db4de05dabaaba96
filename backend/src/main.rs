//! Service entry point: loads settings, opens the pool, and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use todo_backend::inbound::http::health::HealthState;
use todo_backend::outbound::persistence::{DbPool, PoolConfig};
use todo_backend::settings::ServiceSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        ServiceSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let pool_config =
        PoolConfig::new(settings.database_url()?).with_max_size(settings.pool_max_size()?);

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to connect to the database")?;
    pool.ping().await.wrap_err("database ping failed")?;
    info!("connected to the database");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, pool).with_store_timeout(settings.store_timeout()?);
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated with an error")
}
