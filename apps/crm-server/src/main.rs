mod config;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use config::{AppConfig, DatabaseConfig, LogFormat, LoggingConfig};
use crm_service::CrmServiceModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Customer and vendor REST server
#[derive(Debug, Parser)]
#[command(name = "crm-server", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load reference data at startup
    #[arg(long)]
    seed: bool,
}

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config and initialize logging before any other operations
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.seed {
        config.crm_service.load_seed_data = true;
    }
    init_logging(&config.logging)?;

    run(config).await
}

async fn run(config: AppConfig) -> Result<()> {
    let db = connect(&config.database).await?;

    let module = CrmServiceModule::default();
    module.migrate(&db).await?;
    module.init(config.crm_service.clone(), db).await?;

    let router = module
        .register_rest(Router::new())?
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "crm-server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("crm-server stopped");
    Ok(())
}

async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.url.clone());
    if config.is_in_memory() {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(config.max_connections);
    }
    opts.sqlx_logging(false);

    let db = Database::connect(opts).await?;
    tracing::info!(in_memory = config.is_in_memory(), "database connected");
    Ok(db)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}
