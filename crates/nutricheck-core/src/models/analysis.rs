// ABOUTME: Wire types for the AI analysis and recommendation service
// ABOUTME: Request carries user and product name; response carries explanation and alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use serde::{Deserialize, Serialize};

/// Body of an analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Identifier of the signed-in user
    pub user_id: String,
    /// Name of the product to analyze
    pub product_name: String,
}

/// A product suggested as an alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedProduct {
    /// Catalog identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product image
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

/// Per-nutrient evaluation reported by the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientAssessment {
    /// Nutrient name as the service reports it
    pub nutrient: String,
    /// Free-text evaluation
    pub evaluation: String,
}

/// Response of the analysis service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Generated suitability explanation
    #[serde(default, alias = "aiDescription")]
    pub ai_description: Option<String>,
    /// Nutrient-by-nutrient evaluation
    #[serde(default)]
    pub nutrition_analysis: Vec<NutrientAssessment>,
    /// Cross-contamination warning text, empty when none
    #[serde(default)]
    pub indirect_allergy: Option<String>,
    /// Suggested alternatives
    #[serde(default)]
    pub recommendations: Vec<RecommendedProduct>,
}
