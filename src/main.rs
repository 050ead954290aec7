use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reel_recs::{
    config::Config,
    routes::{create_router, AppState},
    services::{load_catalog, JsonFileSource},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reel_recs=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // A mismatched pair of artifacts aborts startup here.
    let source = JsonFileSource::new(&config.titles_path, &config.similarity_path);
    let catalog = load_catalog(&source).context("Failed to load movie catalog")?;

    let app = create_router(AppState::new(catalog, &config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
