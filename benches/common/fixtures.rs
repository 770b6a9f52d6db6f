// ABOUTME: Benchmark fixtures generating synthetic product catalogs and profiles
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Synthetic catalog generation for benchmarks.

use async_trait::async_trait;
use nutricheck::clients::FoodDataSource;
use nutricheck::errors::{AppError, AppResult};
use nutricheck::models::{
    AnalysisRequest, AnalysisResponse, NutritionFacts, Product, UserProfile,
};

const ALLERGENS: [&str; 8] = [
    "peanut", "milk", "egg", "wheat", "soy", "shrimp", "walnut", "buckwheat",
];

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// A single category page
    Small,
    /// A typical store catalog
    Medium,
    /// Stress size
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

fn amount(index: usize, stride: usize, modulo: usize, base: f64) -> Option<f64> {
    // roughly one product in seven leaves the field blank
    (index % 7 != 3).then(|| base + ((index * stride) % modulo) as f64)
}

/// Allergen text picking `count` allergens starting at `offset`
fn allergen_text(offset: usize, count: usize) -> String {
    (0..count)
        .map(|i| ALLERGENS[(offset + i) % ALLERGENS.len()])
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate a deterministic catalog of `size` products
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Product> {
    (0..size.count())
        .map(|index| Product {
            id: i64::try_from(index).unwrap_or(i64::MAX),
            name: format!("Product {index}"),
            image_url: None,
            allergy: Some(allergen_text(index, index % 3)),
            indirect_allergy: Some(allergen_text(index * 5, index % 2)),
            nutrition: NutritionFacts {
                calories: amount(index, 37, 500, 50.0),
                sodium: amount(index, 131, 2000, 10.0),
                carbohydrate: amount(index, 17, 90, 1.0),
                sugar: amount(index, 11, 40, 0.0),
                fat: amount(index, 13, 30, 0.0),
                trans_fat: amount(index, 3, 2, 0.0),
                saturated_fat: amount(index, 7, 12, 0.0),
                cholesterol: amount(index, 19, 80, 0.0),
                protein: amount(index, 23, 25, 0.0),
                calcium: amount(index, 29, 300, 0.0),
                caffeine: None,
                serving_size: amount(index, 41, 200, 20.0),
            },
        })
        .collect()
}

/// Profile with a peanut allergy and two conditions
#[must_use]
pub fn sample_profile() -> UserProfile {
    UserProfile {
        user_id: Some("bench-user".to_owned()),
        username: "bench".to_owned(),
        nickname: None,
        allergies: Some("peanut, milk".to_owned()),
        medical_conditions: Some("hypertension, diabetes".to_owned()),
    }
}

/// Data source answering instantly from a generated catalog
pub struct StaticSource {
    catalog: Vec<Product>,
    profile: UserProfile,
}

impl StaticSource {
    #[must_use]
    pub fn new(size: CatalogSize) -> Self {
        Self {
            catalog: generate_catalog(size),
            profile: sample_profile(),
        }
    }
}

#[async_trait]
impl FoodDataSource for StaticSource {
    async fn fetch_profile(&self, _user_id: &str) -> AppResult<UserProfile> {
        Ok(self.profile.clone())
    }

    async fn fetch_product(&self, product_id: i64) -> AppResult<Product> {
        self.catalog
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Product {product_id}")))
    }

    async fn fetch_catalog(&self) -> AppResult<Vec<Product>> {
        Ok(self.catalog.clone())
    }

    async fn analyze(&self, _request: &AnalysisRequest) -> AppResult<AnalysisResponse> {
        Ok(AnalysisResponse::default())
    }
}
