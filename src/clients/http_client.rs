// ABOUTME: Shared HTTP client with connection pooling for upstream service calls
// ABOUTME: Singleton with configurable timeouts initialized at server startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use crate::config::HttpClientConfig;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use tracing::warn;

/// Configured timeout values for the shared client
static CLIENT_CONFIG: OnceLock<HttpClientConfig> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client timeout configuration
///
/// Call once at startup before any client is created. Later calls are
/// ignored. Without it the defaults apply (30s request, 10s connect).
pub fn initialize_shared_client(config: HttpClientConfig) {
    if CLIENT_CONFIG.set(config).is_err() {
        warn!("Shared HTTP client already configured; ignoring new timeouts");
    }
}

/// Build a client with the given timeouts
#[must_use]
pub fn build_client(config: &HttpClientConfig) -> Client {
    ClientBuilder::new()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}

/// Get the shared HTTP client for upstream calls
#[must_use]
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| build_client(&CLIENT_CONFIG.get().copied().unwrap_or_default()))
}
