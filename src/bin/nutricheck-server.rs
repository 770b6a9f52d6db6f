// ABOUTME: HTTP server binary exposing allergen classification and suitability pages
// ABOUTME: Loads environment configuration, initializes logging and the shared client, then serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # `NutriCheck` Server Binary
//!
//! Serves the suitability API on `HTTP_PORT` until SIGINT or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use nutricheck::{
    clients::{initialize_shared_client, HttpFoodDataClient},
    config::ServerConfig,
    logging,
    routes::{build_router, AppState},
    services::SuitabilityService,
};
use std::future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tracing::{info, warn};

/// Command-line options for the server
#[derive(Parser)]
#[command(name = "nutricheck-server")]
#[command(about = "NutriCheck - allergen suitability API for the nutrition facts view")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    logging::init_from_env()?;
    info!("{}", config.summary());

    initialize_shared_client(config.http_client);

    let source = Arc::new(HttpFoodDataClient::new(config.services.clone()));
    let service = SuitabilityService::new(source)
        .with_locale(config.locale)
        .with_top_k(config.recommendation_top_k);
    let router = build_router(Arc::new(AppState::new(service)), &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("NutriCheck listening on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("NutriCheck stopped");
    Ok(())
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
