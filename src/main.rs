mod api;
mod config;
mod error;
mod routes;
mod state;

use axum::http::HeaderValue;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiClient, PROJECT_PAGE_SIZE};
use crate::config::{Cli, Config, CorsConfig};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    let api = ApiClient::new(config.api.base_url.clone());
    tracing::info!("Backend API: {}", api.base_url());

    // Build app state
    let state = AppState { api: api.clone() };

    // Build router
    let app = routes::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(build_cors(&config.cors));

    // Upstream reachability probe. The three section fetches run
    // concurrently and are joined only so readiness shows up as one log
    // line; page rendering never depends on this.
    tokio::spawn(async move {
        let started = Instant::now();
        let (profile, projects, skills) = tokio::join!(
            api.profile(),
            api.projects(PROJECT_PAGE_SIZE),
            api.skills(),
        );
        tracing::info!(
            "Upstream probe finished in {:?}: profile={}, projects={}, skills={}",
            started.elapsed(),
            probe_status(profile.is_some()),
            probe_status(projects.is_some()),
            probe_status(skills.is_some()),
        );
    });

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn probe_status(reachable: bool) -> &'static str {
    if reachable {
        "ok"
    } else {
        "fallback"
    }
}

/// CORS for the served page. With no configured origins the layer stays
/// permissive; a configured list locks it down.
fn build_cors(config: &CorsConfig) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok());
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
