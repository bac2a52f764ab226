mod client;
mod config;
mod models;
mod page;
mod pdf;
mod routes;
mod shell;
mod synthesis;

use rand::SeedableRng;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

use crate::client::ViralCraftClient;
use crate::config::{DelayRange, Settings};
use crate::routes::{router, AppState};
use crate::shell::Shell;
use crate::synthesis::RngSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = Settings::from_env();
    let client = ViralCraftClient::new(&settings.api_url);
    tracing::info!("🔗 Generation service: {}", client.base_url());

    let shell = Arc::new(Shell::new(
        Arc::new(client),
        Box::new(RngSource(rand::rngs::StdRng::from_entropy())),
        DelayRange::default(),
    ));

    // Trending data is fetched once, independently of any generation.
    tokio::spawn({
        let shell = shell.clone();
        async move { shell.load_trending_elements().await }
    });

    let app = router(AppState { shell });

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!(%addr, "Starting ViralCraft interface");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;
    Ok(())
}
