// ABOUTME: Route handlers for allergen classification and the product suitability page
// ABOUTME: Thin axum handlers delegating to the classifier and SuitabilityService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Suitability routes
//!
//! - `POST /api/suitability/classify`: classify raw allergen fields. Each
//!   field may be a string, `null` or missing; anything else is rejected.
//! - `GET /api/products/:id/suitability`: the full page for the user named
//!   by `X-User-Id`, with `?analyze=true` and `?insights=true` sections.

use super::AppState;
use crate::constants::{endpoints, headers as header_names};
use crate::errors::{AppError, AppResult};
use crate::intelligence::{classify_json_fields, NoteLocale, SuitabilityReport};
use crate::services::{PageOptions, SuitabilityPage};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Body of a classification request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    /// User's declared allergies
    #[serde(default)]
    pub user_allergies: Value,
    /// Product's direct allergens
    #[serde(default)]
    pub product_allergens: Value,
    /// Product's cross-contamination allergens
    #[serde(default)]
    pub product_indirect_allergens: Value,
}

/// Query parameters of a classification request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifyQuery {
    /// Note language (`en` or `ko`); the server default when absent
    pub locale: Option<String>,
}

/// Suitability routes handler
pub struct SuitabilityRoutes;

impl SuitabilityRoutes {
    /// Create all suitability routes
    #[must_use]
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(endpoints::CLASSIFY, post(Self::handle_classify))
            .route(
                &format!("{}/:id/suitability", endpoints::PRODUCTS),
                get(Self::handle_page),
            )
            .with_state(state)
    }

    fn request_id(headers: &HeaderMap) -> Option<String> {
        headers
            .get(header_names::REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    }

    fn tag_request(error: AppError, headers: &HeaderMap) -> AppError {
        match Self::request_id(headers) {
            Some(request_id) => error.with_request_id(request_id),
            None => error,
        }
    }

    /// Signed-in user from `X-User-Id`
    fn user_id(headers: &HeaderMap) -> AppResult<String> {
        headers
            .get(header_names::USER_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
            .ok_or_else(AppError::auth_required)
    }

    /// Handle POST /api/suitability/classify
    async fn handle_classify(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        query: Result<Query<ClassifyQuery>, QueryRejection>,
        body: Result<Json<ClassifyRequest>, JsonRejection>,
    ) -> AppResult<Json<SuitabilityReport>> {
        let Query(query) = query
            .map_err(|e| Self::tag_request(AppError::invalid_input(e.body_text()), &headers))?;
        let Json(body) = body
            .map_err(|e| Self::tag_request(AppError::invalid_input(e.body_text()), &headers))?;

        let locale = query
            .locale
            .as_deref()
            .map_or(state.locale, NoteLocale::from_str_or_default);

        let report = classify_json_fields(
            &body.user_allergies,
            &body.product_allergens,
            &body.product_indirect_allergens,
            locale,
        )
        .map_err(|e| Self::tag_request(e.into(), &headers))?;

        debug!(verdict = %report.verdict, "Classified allergen fields");
        Ok(Json(report))
    }

    /// Handle GET /api/products/:id/suitability
    async fn handle_page(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        product_id: Result<Path<i64>, PathRejection>,
        options: Result<Query<PageOptions>, QueryRejection>,
    ) -> AppResult<Json<SuitabilityPage>> {
        let user_id = Self::user_id(&headers).map_err(|e| Self::tag_request(e, &headers))?;
        let Path(product_id) = product_id
            .map_err(|e| Self::tag_request(AppError::invalid_input(e.body_text()), &headers))?;
        let Query(options) = options
            .map_err(|e| Self::tag_request(AppError::invalid_input(e.body_text()), &headers))?;

        let page = state
            .service
            .evaluate(&user_id, product_id, options)
            .await
            .map_err(|e| Self::tag_request(e, &headers))?;
        Ok(Json(page))
    }
}
