use actix_web::{middleware::Logger, App, HttpServer};
use board_api::config::ApiConfig;
use board_api::storage::{SharedMessageStore, SqliteMessageStore};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "board-api", version, about = "Message board HTTP API")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (config, config_path) = ApiConfig::load(args.config.as_deref())?;
    info!("Loaded configuration from {}", config_path.display());

    let store: SharedMessageStore = Arc::new(SqliteMessageStore::open(&config.database.path)?);
    info!("Database ready at {}", config.database.path.display());

    let bind_addr = config.bind_addr();
    info!("Starting board-api server at http://{}", bind_addr);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(board_api::build_cors(&cors_config))
            .configure(board_api::configure(store.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
