mod api_models;
mod app;
mod handler;
mod models;
mod routes;
mod services;
mod utils;
mod views;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let server = utils::config::ServerConfig::from_env()?;
    let dashboard = utils::config::DashboardConfig::from_env();
    tracing::info!("dataset path: {}", dashboard.dataset_path.display());

    let app = app::build_app(&dashboard);

    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .with_context(|| format!("bind {} failed", server.addr))?;
    tracing::info!("Axum listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
