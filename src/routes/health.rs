// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness and readiness probes reporting service name, version and timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Health check routes
//!
//! Both probes answer without touching the upstream services: `NutriCheck`
//! holds no state of its own, so once the listener is up it is ready.

use crate::constants::{endpoints, service_names};
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes<S>() -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
            .route(endpoints::HEALTH_CHECK, get(Self::health_handler))
            .route(endpoints::READY_CHECK, get(Self::ready_handler))
    }

    async fn health_handler() -> Json<Value> {
        Json(Self::status_body("healthy"))
    }

    async fn ready_handler() -> Json<Value> {
        Json(Self::status_body("ready"))
    }

    fn status_body(status: &str) -> Value {
        json!({
            "status": status,
            "service": service_names::NUTRICHECK,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        })
    }
}
