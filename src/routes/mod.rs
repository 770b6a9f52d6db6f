// ABOUTME: Route module organization for NutriCheck HTTP endpoints
// ABOUTME: Builds the axum router with shared state, tracing, request IDs, CORS and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! HTTP routes
//!
//! Each domain module holds only route definitions and thin handlers that
//! delegate to [`crate::services`].

/// Health check and readiness routes
pub mod health;
/// Allergen classification and suitability page routes
pub mod suitability;

pub use health::HealthRoutes;
pub use suitability::SuitabilityRoutes;

use crate::config::ServerConfig;
use crate::constants::defaults;
use crate::intelligence::NoteLocale;
use crate::middleware::{http_trace_layer, request_id_layers, setup_cors};
use crate::services::SuitabilityService;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Suitability orchestration
    pub service: SuitabilityService,
    /// Language of notes produced by the offline classifier endpoint
    pub locale: NoteLocale,
}

impl AppState {
    /// Wrap a service; the classifier endpoint uses the service's locale
    #[must_use]
    pub fn new(service: SuitabilityService) -> Self {
        let locale = service.locale();
        Self { service, locale }
    }
}

/// Build the application router with middleware
#[must_use]
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let request_ids = request_id_layers();
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(SuitabilityRoutes::routes(state))
        .layer(TimeoutLayer::new(Duration::from_secs(
            defaults::REQUEST_TIMEOUT_SECS,
        )))
        .layer(setup_cors(config))
        .layer(request_ids.propagate)
        .layer(http_trace_layer())
        .layer(request_ids.set)
}
