// ABOUTME: HTTP server assembly and lifecycle for the Health Copilot API
// ABOUTME: Merges route groups, applies tracing and CORS layers, and shuts down on SIGINT/SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Server
//!
//! [`build_router`] is the complete application and is what integration tests
//! drive. [`run`] binds it to the configured address.

use std::future;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::constants::endpoints;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{ChatRoutes, DashboardRoutes, HealthRoutes};

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(DashboardRoutes::routes(Arc::clone(&resources)))
        .merge(ChatRoutes::routes(resources))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let host = resources.config.host.clone();
    let port = resources.config.http_port;
    let address = format!("{host}:{port}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow!("Failed to bind {address}: {e}"))?;

    info!("Health Copilot API listening on http://{address}");
    display_available_endpoints(&host, port);

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("HTTP server error: {e}"))?;

    info!("Server stopped");
    Ok(())
}

async fn not_found(method: Method, uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "message": format!("Route {method} {} not found", uri.path()),
        })),
    )
        .into_response()
}

fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    for (method, path) in [
        ("GET ", endpoints::HEALTH_CHECK),
        ("GET ", endpoints::HEALTH_OVERVIEW),
        ("POST", endpoints::HEALTH_ACTIONS),
        ("GET ", endpoints::HEALTH_HISTORY),
        ("POST", endpoints::CHAT_MESSAGE),
        ("GET ", endpoints::CHAT_STATUS),
    ] {
        info!("   {method} http://{host}:{port}{path}");
    }
}

async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {e}");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = interrupt => info!("SIGINT received, shutting down gracefully"),
        () = terminate => info!("SIGTERM received, shutting down gracefully"),
    }
}
