// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns x-request-id to every request and opens a span carrying it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use crate::constants::headers;
use axum::body::Body;
use http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{HttpMakeClassifier, TraceLayer};
use tracing::{info_span, Span};

/// Layer pair that assigns and echoes `x-request-id`
pub struct RequestIdLayers {
    /// Generates an ID when the client sent none
    pub set: SetRequestIdLayer<MakeRequestUuid>,
    /// Copies the ID onto the response
    pub propagate: PropagateRequestIdLayer,
}

/// Build the request ID layers
#[must_use]
pub fn request_id_layers() -> RequestIdLayers {
    let header = HeaderName::from_static(headers::REQUEST_ID);
    RequestIdLayers {
        set: SetRequestIdLayer::new(header.clone(), MakeRequestUuid),
        propagate: PropagateRequestIdLayer::new(header),
    }
}

/// Span for one HTTP request, tagged with its request and user IDs
#[must_use]
pub fn make_request_span(request: &Request<Body>) -> Span {
    let header_value = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-")
            .to_owned()
    };
    info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %header_value(headers::REQUEST_ID),
        user_id = %header_value(headers::USER_ID),
    )
}

/// `TraceLayer` using [`make_request_span`]
#[must_use]
pub fn http_trace_layer() -> TraceLayer<HttpMakeClassifier, fn(&Request<Body>) -> Span> {
    TraceLayer::new_for_http().make_span_with(make_request_span as fn(&Request<Body>) -> Span)
}
