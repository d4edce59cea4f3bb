// src/main.rs
//
// producao server binary

use std::sync::Arc;

use clap::Parser;

use producao::application::{build_router, AppState};
use producao::config::Cli;
use producao::db::{
    create_connection_pool, get_database_stats, initialize_database, verify_database_integrity,
};
use producao::events::register_logging_handlers;
use producao::infrastructure::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging (log records are bridged into the subscriber)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    // 1. INFRASTRUCTURE
    let db_path = cli.database_path()?;
    log::info!("Opening database at {}", db_path.display());
    let pool = Arc::new(create_connection_pool(&db_path, cli.pool_size)?);

    // Initialize schema (idempotent)
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn)?;

        let stats = get_database_stats(&conn)?;
        log::info!(
            "Database ready: {} criacoes, {} coletas, {} bytes",
            stats.criacao_count,
            stats.coleta_count,
            stats.size_bytes
        );
    }

    // 2. SERVICES
    let state = AppState::wire(pool, Arc::new(SystemClock));
    register_logging_handlers(&state.event_bus);

    // 3. HTTP
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    log::info!("Listening on {}", cli.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
