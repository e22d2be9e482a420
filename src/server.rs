//! HTTP router assembly and serving.

use crate::config::Config;
use crate::db::Database;
use crate::render::Renderer;
use crate::{api, pages};
use anyhow::{Context, Result};
use axum::{
    extract::Request,
    routing::{get, post},
    Router, ServiceExt,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::{normalize_path::NormalizePathLayer, trace::TraceLayer};
use tracing::info;

/// Shared handles every handler can reach.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Result<Self> {
        let renderer = Renderer::new(&config.public_url)?;
        Ok(Self {
            db,
            config: Arc::new(config),
            renderer: Arc::new(renderer),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::root))
        .route("/health", get(api::health))
        .route("/locale", post(pages::set_locale))
        .route("/api/artists", get(api::list_artists).post(api::create_artist))
        .route("/api/posts", get(api::list_posts).post(api::create_post))
        .route("/api/songs", post(api::create_song))
        .route("/api/comments", post(api::create_comment))
        .route("/api/likes", post(api::toggle_like))
        .route("/:locale", get(pages::home))
        .route("/:locale/artists", get(pages::artists))
        .route("/:locale/artists/:slug", get(pages::artist))
        .route("/:locale/music", get(pages::music))
        .route("/:locale/posts", get(pages::posts))
        .route("/:locale/posts/:slug", get(pages::post))
        .route("/:locale/search", get(pages::search))
        .route("/:locale/admin", get(pages::admin))
        .fallback(pages::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on `listener` until Ctrl-C.
///
/// Trailing slashes are trimmed before routing, so `/en/artists/` and
/// `/en/artists` reach the same handler.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = NormalizePathLayer::trim_trailing_slash().layer(router(state));

    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
