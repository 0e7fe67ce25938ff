pub mod handlers;

use anyhow::Result;
use axum::Router;
use axum::routing::post;
use handlers::analyze_and_feedback;
use lib::env_keys::BIND_ADDRESS;
use lib::service::CommonService;
use tracing_subscriber::EnvFilter;


#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let service = CommonService::new();

    let app = Router::new()
        .route("/analyze_and_feedback", post(analyze_and_feedback))
        .with_state(service);

    let address = std::env::var(BIND_ADDRESS).unwrap_or("127.0.0.1:8000".to_owned());
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("listening on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
