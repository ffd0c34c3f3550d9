use anyhow::{Context, Result};
use employee_form_server::{load_config, router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let addr = config.server.addr();
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
