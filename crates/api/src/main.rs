use anyhow::Context;

use yakshop_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    yakshop_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(max_day = config.max_day, "configuration loaded");

    let app = yakshop_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
