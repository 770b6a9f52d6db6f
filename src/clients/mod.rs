// ABOUTME: Upstream service abstraction for profile, catalog and analysis data
// ABOUTME: Defines the FoodDataSource trait and its reqwest-backed implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Upstream Clients
//!
//! `NutriCheck` owns no data. Profiles, products and AI analysis all come
//! from external services behind the [`FoodDataSource`] trait, so the
//! orchestration layer can be exercised against an in-memory source.

use crate::errors::AppResult;
use crate::models::{AnalysisRequest, AnalysisResponse, Product, UserProfile};
use async_trait::async_trait;

/// reqwest implementation of [`FoodDataSource`]
pub mod food_data;
/// Shared connection pool
pub mod http_client;

pub use food_data::HttpFoodDataClient;
pub use http_client::{initialize_shared_client, shared_client};

/// Source of the records the suitability view is built from
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Profile of the signed-in user identified by `user_id`
    async fn fetch_profile(&self, user_id: &str) -> AppResult<UserProfile>;

    /// A single catalog product
    async fn fetch_product(&self, product_id: i64) -> AppResult<Product>;

    /// Every catalog product
    async fn fetch_catalog(&self) -> AppResult<Vec<Product>>;

    /// AI suitability analysis and recommendations for a user/product pair
    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AnalysisResponse>;
}
