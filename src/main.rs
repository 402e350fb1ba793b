mod auth;
mod config;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{Json, Router, routing::get};
use chrono::Local;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::AccessGate;
use crate::config::ServerConfig;
use crate::state::AppState;
use crate::store::EventStore;

#[derive(Parser)]
#[command(name = "weekplan-server", version, about = "REST backend for the weekplan calendar")]
struct Cli {
    /// Port to listen on (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replace the store contents with demo data for the current week
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config)?;
    let port = cli.port.unwrap_or(config.port);

    let store = EventStore::open(config.data_file.clone())?;
    if cli.seed {
        store.seed(Local::now().date_naive()).await?;
        log::info!("seeded demo data into {}", config.data_file.display());
    }

    let gate = AccessGate::new(&config.jwt_secret, config.token_ttl_hours);
    let state = AppState {
        store: Arc::new(store),
        gate: Arc::new(gate),
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::auth::router())
        .merge(routes::events::router())
        .merge(routes::calendar::router())
        .route("/health", get(health))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    log::info!("weekplan-server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
