//! HTTP server publishing the waste-collection schedule of one property as a
//! text summary and an iCalendar feed.

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tracing_subscriber::EnvFilter;
use uwc_core::{collection_client, config::Config, reqwest};

mod route;

/// State shared by all request handlers.
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let config = Config::from_env();
    if config.uprn.is_none() {
        tracing::warn!("UPRN is not configured, requests will fail until it is set");
    }
    let state = Arc::new(AppState {
        client: collection_client::http_client()?,
        config,
    });
    let app = Router::new()
        .route("/", get(route::text::handler))
        .route("/test", get(route::text::handler))
        .route("/calendar.ics", get(route::calendar::handler))
        .route("/health", get(route::health::handler))
        .with_state(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], 8008));
    tracing::info!(%addr, "serving waste collection schedule");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
