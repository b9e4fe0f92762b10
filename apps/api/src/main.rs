mod config;
mod errors;
mod i18n;
mod layout;
mod models;
mod render;
mod routes;
mod state;
mod transfer;
mod views;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting transfer-log v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone())?;
    info!(
        "Page layout: {}x{}pt, {} rows on page one, {} per continuation page",
        state.page_config.page_width_pt,
        state.page_config.page_height_pt,
        state.page_config.first_page_capacity(),
        state.page_config.continuation_capacity()
    );
    info!("Default language: {}", config.default_lang);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
