// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, environment keys, HTTP headers, and defaults for NutriCheck
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Service identifiers used in logs and error messages
pub mod service_names {
    /// This service
    pub const NUTRICHECK: &str = "nutricheck";
    /// User profile service
    pub const PROFILE: &str = "profile-service";
    /// Product catalog service
    pub const CATALOG: &str = "catalog-service";
    /// AI analysis and recommendation service
    pub const ANALYSIS: &str = "analysis-service";
}

/// API endpoints (both served and consumed)
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Signed-in user's profile on the profile service
    pub const CURRENT_USER: &str = "/api/users/me";
    /// Product record prefix on the catalog service
    pub const PRODUCTS: &str = "/api/products";
    /// Analysis endpoint on the AI service
    pub const AI_ANALYZE: &str = "/api/ai/analyze";
    /// Raw-string classification endpoint served by NutriCheck
    pub const CLASSIFY: &str = "/api/suitability/classify";
}

/// HTTP header names
pub mod headers {
    /// Identity of the signed-in user, forwarded to the profile service
    pub const USER_ID: &str = "x-user-id";
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Base URL of the profile service
    pub const PROFILE_SERVICE_URL: &str = "PROFILE_SERVICE_URL";
    /// Base URL of the catalog service
    pub const CATALOG_SERVICE_URL: &str = "CATALOG_SERVICE_URL";
    /// Base URL of the analysis service
    pub const ANALYSIS_SERVICE_URL: &str = "ANALYSIS_SERVICE_URL";
    /// Total request timeout for outbound calls
    pub const HTTP_CLIENT_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Connect timeout for outbound calls
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: &str = "HTTP_CLIENT_CONNECT_TIMEOUT_SECS";
    /// Note language (`en` or `ko`)
    pub const NUTRICHECK_LOCALE: &str = "NUTRICHECK_LOCALE";
    /// Number of alternative products to recommend
    pub const RECOMMENDATION_TOP_K: &str = "RECOMMENDATION_TOP_K";
    /// Comma-separated allowed CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default base URL for every upstream service
    pub const SERVICE_BASE_URL: &str = "http://localhost:8080";
    /// Default request timeout in seconds
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout in seconds
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default number of recommendations
    pub const RECOMMENDATION_TOP_K: usize = 3;
    /// Allowed CORS origins when unset
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Per-request timeout for inbound HTTP requests (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
    /// Serving size assumed when a product does not declare one (grams)
    pub const SERVING_SIZE_GRAMS: f64 = 100.0;
}
