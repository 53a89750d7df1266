//! Product API server. `--clear` resets the products table and exits; `--memory` serves without a database.

use clap::Parser;
use product_api::{
    build_app, ensure_database_exists, reset_schema, sync_schema, AppConfig, AppError, AppState, MemoryProductRepository,
    PgProductRepository,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "REST API for products")]
struct Cli {
    /// Drop and recreate the products table, then exit.
    #[arg(long, conflicts_with = "memory")]
    clear: bool,

    /// Keep products in memory instead of PostgreSQL.
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    if cli.clear {
        return Ok(match clear_database(&config).await {
            Ok(()) => {
                tracing::info!("database cleared");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to clear database");
                ExitCode::FAILURE
            }
        });
    }

    let state = if cli.memory {
        tracing::info!("using in-memory product store");
        AppState::new(MemoryProductRepository::new())
    } else {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.database_url)?;
        connect_db(&config, &pool).await;
        AppState::new(PgProductRepository::new(pool))
    };

    if config.frontend_url.is_none() {
        tracing::warn!("FRONTEND_URL not set; cross-origin requests will be rejected");
    }

    let app = build_app(state, &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(ExitCode::SUCCESS)
}

/// Create the database if needed and sync the schema. Failures are logged and the server keeps
/// running on the lazy pool, so it recovers once the database becomes reachable.
async fn connect_db(config: &AppConfig, pool: &PgPool) {
    if let Err(e) = ensure_database_exists(&config.database_url).await {
        tracing::warn!(error = %e, "could not verify database exists");
    }
    match sync_schema(pool).await {
        Ok(()) => tracing::info!("database connection established"),
        Err(e) => tracing::error!(error = %e, "Hubo un error al conectar a la BD"),
    }
}

async fn clear_database(config: &AppConfig) -> Result<(), AppError> {
    let pool = PgPoolOptions::new().max_connections(1).connect(&config.database_url).await?;
    reset_schema(&pool).await
}
