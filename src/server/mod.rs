//! HTTP wiring: axum router over a loaded [`InventoryStore`].
//!
//! - `routes.rs`: handlers for the inventory endpoint
//! - `cors.rs`: cross-origin headers added to every response
//! - `errors.rs`: plain-text error responses

use anyhow::{Context, Result};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::store::InventoryStore;
use crate::utils::config::INVENTORY_ROUTE;

pub mod cors;
pub mod errors;
pub mod routes;

pub use cors::CorsPolicy;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InventoryStore>,
}

/// Build the router: `GET`/`OPTIONS` on the inventory route, 405 for anything else.
/// `HEAD` is routed explicitly; otherwise `get` would answer it.
pub fn build_app(store: Arc<InventoryStore>, cors: CorsPolicy) -> Router {
    Router::new()
        .route(
            INVENTORY_ROUTE,
            get(routes::list_inventory)
                .head(routes::method_not_allowed)
                .options(routes::preflight)
                .fallback(routes::method_not_allowed),
        )
        .layer(middleware::map_response_with_state(
            cors,
            cors::apply_cors_headers,
        ))
        .with_state(AppState { store })
}

/// Bind `addr` and serve `app` until Ctrl+C.
pub async fn serve(addr: &str, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    log::info!(
        "Server listening on http://{}{}",
        listener.local_addr()?,
        INVENTORY_ROUTE
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server")?;
    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Cannot listen for Ctrl+C ({}); stop the process to exit", e);
        std::future::pending::<()>().await;
    }
}
