use kas_badminton_backend::config::AppConfig;
use kas_badminton_backend::{create_router, initialize_backend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kas_badminton_backend=debug,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("Starting KAS badminton backend");

    let state = initialize_backend(&config)?;
    let app = create_router(state, &config.cors_origin)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
