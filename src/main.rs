// src/main.rs
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use notice_api::common::{self, AppConfig, AppState};
use notice_api::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool, config.reset_db).await?;

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let state = Arc::new(AppState { db: pool });
    let app = routes::app_router(state, &config.cors_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
