//! # superheroesd — superheroes daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use superheroes_adapter_http_axum::state::AppState;
use superheroes_adapter_storage_sqlite_sqlx::{
    Config as DatabaseConfig, SqliteHeroPowerRepository, SqliteHeroRepository,
    SqlitePowerRepository,
};
use superheroes_app::services::hero_power_service::HeroPowerService;
use superheroes_app::services::hero_service::HeroService;
use superheroes_app::services::power_service::PowerService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
        max_connections: config.database.max_connections,
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let hero_service = HeroService::new(
        SqliteHeroRepository::new(pool.clone()),
        SqlitePowerRepository::new(pool.clone()),
    );
    let power_service = PowerService::new(SqlitePowerRepository::new(pool.clone()));
    let hero_power_service = HeroPowerService::new(
        SqliteHeroRepository::new(pool.clone()),
        SqlitePowerRepository::new(pool.clone()),
        SqliteHeroPowerRepository::new(pool),
    );

    // HTTP
    let state = AppState::new(hero_service, power_service, hero_power_service);
    let app = superheroes_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "superheroesd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("superheroesd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
