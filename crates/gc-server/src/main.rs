//! Grievance classification server.
//!
//! Run with: cargo run -p gc-server

use gc_core::GrievanceConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gc_server=info,gc_classifier=info,gc_generator=info,tower_http=info")),
        )
        .init();

    info!("Grievance classification API {}", env!("CARGO_PKG_VERSION"));

    let config = GrievanceConfig::load()?;
    let app = gc_server::app(&config)?;

    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down");
        })
        .await?;

    Ok(())
}
