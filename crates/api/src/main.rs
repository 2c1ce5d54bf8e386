use anyhow::{Context, Result};
use folio_api::{build_app, ApiConfig};
use folio_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("folio_api");

    let config = ApiConfig::from_env();
    let app = build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        bind = %config.bind,
        rate_limited = config.rate_limit.is_some(),
        "folio assistant api started"
    );

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
