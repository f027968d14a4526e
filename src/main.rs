mod app;
mod routes;
mod services;
mod types;
mod utils;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = app::AppConfig::from_env()?;
    if config.places_api_key.is_none() {
        tracing::warn!("GOOGLE_PLACES_API_KEY is not set, address lookups will fail");
    }

    let bind_addr = config.bind_addr;
    let app = app::gen_app(config)?;

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
