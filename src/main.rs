// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

mod api;
mod auth;
mod config;
mod error;
mod models;
mod state;
mod store;

use std::{env, net::SocketAddr};

use tracing_subscriber::EnvFilter;

use api::router;
use config::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SESSION_SECRET, HOST_ENV, LOG_FORMAT_ENV, PORT_ENV,
    SESSION_SECRET_ENV,
};
use state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let secret =
        env::var(SESSION_SECRET_ENV).unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string());
    if secret == DEFAULT_SESSION_SECRET {
        tracing::warn!("SESSION_SECRET not set, using built-in development secret");
    }

    let state = AppState::new(&secret);
    let app = router(state);

    // Parse bind address
    let host = env::var(HOST_ENV).unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = env::var(PORT_ENV)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!("QuickBite server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
