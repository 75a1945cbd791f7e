use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use basketball_backend::configs::{app_state::AppState, config::Config};
use basketball_backend::router;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().expect("failed to load configuration");
    let state = AppState::new(config);

    let addr = SocketAddr::from((state.config.ip, state.config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("listening on {}", addr);

    axum::serve(listener, router(state)).await.unwrap();
}
