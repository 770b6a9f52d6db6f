// ABOUTME: reqwest implementation of FoodDataSource against the profile, catalog and analysis services
// ABOUTME: Maps upstream HTTP failures onto AppError codes with structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # HTTP Food Data Client
//!
//! | call | request |
//! |---|---|
//! | profile | `GET {profile}/api/users/me` with `X-User-Id` |
//! | product | `GET {catalog}/api/products/{id}` |
//! | catalog | `GET {catalog}/api/products` |
//! | analysis | `POST {analysis}/api/ai/analyze` |
//!
//! Status mapping: 401 → `AuthInvalid`, 404 → `ResourceNotFound`, 429 →
//! `ExternalRateLimited`, 5xx → `ExternalServiceUnavailable`, anything else
//! → `ExternalServiceError`. Connection failures are
//! `ExternalServiceUnavailable`.

use super::http_client::shared_client;
use super::FoodDataSource;
use crate::config::ServiceEndpoints;
use crate::constants::{endpoints, headers, service_names};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{AnalysisRequest, AnalysisResponse, Product, UserProfile};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error, instrument};

/// Longest slice of an upstream error body kept in error messages
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Client for the three upstream services
#[derive(Debug, Clone)]
pub struct HttpFoodDataClient {
    client: Client,
    endpoints: ServiceEndpoints,
}

impl HttpFoodDataClient {
    /// Create a client using the shared connection pool
    #[must_use]
    pub fn new(endpoints: ServiceEndpoints) -> Self {
        Self::with_client(shared_client().clone(), endpoints)
    }

    /// Create a client around a specific `reqwest::Client`
    #[must_use]
    pub const fn with_client(client: Client, endpoints: ServiceEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Configured service endpoints
    #[must_use]
    pub const fn endpoints(&self) -> &ServiceEndpoints {
        &self.endpoints
    }

    fn url(base: &str, path: &str) -> String {
        format!("{}{path}", base.trim_end_matches('/'))
    }

    /// Map a non-success upstream status to an application error
    fn parse_error_response(service: &str, status: StatusCode, body: &str) -> AppError {
        let preview: String = body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
        let error = match status.as_u16() {
            401 => AppError::auth_invalid(format!("{service} rejected the user identity")),
            404 => AppError::not_found(format!("{service} resource")),
            429 => AppError::new(
                ErrorCode::ExternalRateLimited,
                format!("{service} rate limit reached, try again shortly"),
            ),
            500..=599 => AppError::external_unavailable(
                service,
                format!("service error ({status}): {preview}"),
            ),
            _ => AppError::external_service(service, format!("API error ({status}): {preview}")),
        };
        error.with_details(json!({ "service": service, "status": status.as_u16() }))
    }

    /// Send a request and decode a JSON body
    async fn send_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        request: RequestBuilder,
    ) -> AppResult<T> {
        let response = request.send().await.map_err(|e| {
            error!("Failed to send request to {service}: {e}");
            if e.is_connect() || e.is_timeout() {
                AppError::external_unavailable(service, format!("Cannot reach service: {e}"))
            } else {
                AppError::external_service(service, format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read {service} response: {e}");
            AppError::external_service(service, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            debug!(service, status = status.as_u16(), "Upstream returned an error status");
            return Err(Self::parse_error_response(service, status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse {service} response: {e}");
            AppError::external_service(service, format!("Failed to parse response: {e}"))
                .with_source(e)
        })
    }
}

#[async_trait]
impl FoodDataSource for HttpFoodDataClient {
    #[instrument(skip(self))]
    async fn fetch_profile(&self, user_id: &str) -> AppResult<UserProfile> {
        let request = self
            .client
            .get(Self::url(&self.endpoints.profile_base_url, endpoints::CURRENT_USER))
            .header(headers::USER_ID, user_id);
        self.send_json(service_names::PROFILE, request)
            .await
            .map_err(|e| e.with_user_id(user_id))
    }

    #[instrument(skip(self))]
    async fn fetch_product(&self, product_id: i64) -> AppResult<Product> {
        let path = format!("{}/{product_id}", endpoints::PRODUCTS);
        let request = self
            .client
            .get(Self::url(&self.endpoints.catalog_base_url, &path));
        self.send_json(service_names::CATALOG, request)
            .await
            .map_err(|e| e.with_resource_id(product_id.to_string()))
    }

    #[instrument(skip(self))]
    async fn fetch_catalog(&self) -> AppResult<Vec<Product>> {
        let request = self
            .client
            .get(Self::url(&self.endpoints.catalog_base_url, endpoints::PRODUCTS));
        let products: Vec<Product> = self.send_json(service_names::CATALOG, request).await?;
        debug!(count = products.len(), "Fetched product catalog");
        Ok(products)
    }

    #[instrument(skip(self), fields(user_id = %request.user_id, product = %request.product_name))]
    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AnalysisResponse> {
        let http_request = self
            .client
            .post(Self::url(&self.endpoints.analysis_base_url, endpoints::AI_ANALYZE))
            .json(request);
        self.send_json(service_names::ANALYSIS, http_request).await
    }
}
