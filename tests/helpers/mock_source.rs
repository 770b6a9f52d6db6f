// ABOUTME: In-memory FoodDataSource for exercising the service layer and routes
// ABOUTME: Serves fixture profiles and products with configurable analysis and catalog failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use super::fixtures;
use async_trait::async_trait;
use nutricheck::clients::FoodDataSource;
use nutricheck::constants::service_names;
use nutricheck::errors::{AppError, AppResult};
use nutricheck::models::{
    AnalysisRequest, AnalysisResponse, Product, RecommendedProduct, UserProfile,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// How the fake analysis service answers
#[derive(Debug, Clone)]
pub enum AnalysisBehavior {
    /// Answer with this response
    Respond(AnalysisResponse),
    /// Fail as an unreachable service
    Unavailable,
}

/// Fixture-backed data source
pub struct InMemorySource {
    profiles: Vec<UserProfile>,
    products: Vec<Product>,
    catalog_available: bool,
    analysis: AnalysisBehavior,
    analyze_calls: AtomicUsize,
    catalog_calls: AtomicUsize,
    last_analysis_request: Mutex<Option<AnalysisRequest>>,
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySource {
    /// Fixture profiles and catalog, analysis answering with a generic text
    pub fn new() -> Self {
        Self {
            profiles: fixtures::profiles(),
            products: fixtures::catalog(),
            catalog_available: true,
            analysis: AnalysisBehavior::Respond(AnalysisResponse {
                ai_description: Some("Looks fine for you.".to_owned()),
                recommendations: vec![RecommendedProduct {
                    id: 2,
                    name: "Mild Ramen".to_owned(),
                    image_url: None,
                }],
                ..AnalysisResponse::default()
            }),
            analyze_calls: AtomicUsize::new(0),
            catalog_calls: AtomicUsize::new(0),
            last_analysis_request: Mutex::new(None),
        }
    }

    pub fn with_analysis(mut self, behavior: AnalysisBehavior) -> Self {
        self.analysis = behavior;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Make catalog listing fail while single-product lookups still work
    pub fn without_catalog(mut self) -> Self {
        self.catalog_available = false;
        self
    }

    pub fn analyze_calls(&self) -> usize {
        self.analyze_calls.load(Ordering::SeqCst)
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub fn last_analysis_request(&self) -> Option<AnalysisRequest> {
        self.last_analysis_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl FoodDataSource for InMemorySource {
    async fn fetch_profile(&self, user_id: &str) -> AppResult<UserProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.user_id.as_deref() == Some(user_id))
            .cloned()
            .ok_or_else(|| AppError::auth_invalid(format!("unknown user {user_id}")))
    }

    async fn fetch_product(&self, product_id: i64) -> AppResult<Product> {
        self.products
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Product {product_id}")))
    }

    async fn fetch_catalog(&self) -> AppResult<Vec<Product>> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        if self.catalog_available {
            Ok(self.products.clone())
        } else {
            Err(AppError::external_unavailable(
                service_names::CATALOG,
                "connection refused",
            ))
        }
    }

    async fn analyze(&self, request: &AnalysisRequest) -> AppResult<AnalysisResponse> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_analysis_request.lock().unwrap() = Some(request.clone());
        match &self.analysis {
            AnalysisBehavior::Respond(response) => Ok(response.clone()),
            AnalysisBehavior::Unavailable => Err(AppError::external_unavailable(
                service_names::ANALYSIS,
                "connection refused",
            )),
        }
    }
}
