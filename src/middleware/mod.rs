// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request ID propagation, per-request spans, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

/// CORS configuration
pub mod cors;
/// Request IDs and per-request spans
pub mod request_tracing;

pub use cors::setup_cors;
pub use request_tracing::{http_trace_layer, make_request_span, request_id_layers, RequestIdLayers};
