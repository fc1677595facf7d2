use axum::Router;
use tracing_subscriber::EnvFilter;

use games_api::config::AppConfig;
use games_api::{build_router, AppState, GameStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("App config loaded: {}:{}", config.host, config.port);

    let app_state = AppState::new(GameStore::new());
    let app = build_router(app_state);
    start_server(&config, app).await
}

async fn start_server(config: &AppConfig, app: Router) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    tracing::info!("Server starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;
    Ok(())
}
