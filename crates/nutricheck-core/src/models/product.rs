// ABOUTME: Product catalog record with allergen disclosures and nutrition facts
// ABOUTME: Mirrors the catalog service's camelCase JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use serde::{Deserialize, Serialize};

use super::NutritionFacts;

/// Product record as served by the catalog service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier
    pub id: i64,
    /// Product name, also the key the analysis service looks products up by
    pub name: String,
    /// Product image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Allergens the product contains as ingredients (comma-delimited)
    #[serde(default)]
    pub allergy: Option<String>,
    /// Allergens that may be present through shared manufacturing (comma-delimited)
    #[serde(default)]
    pub indirect_allergy: Option<String>,
    /// Nutrition facts per serving
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
}

impl Product {
    /// Direct allergen text, with an absent field read as empty
    #[must_use]
    pub fn allergy_text(&self) -> &str {
        self.allergy.as_deref().unwrap_or_default()
    }

    /// Cross-contamination allergen text, with an absent field read as empty
    #[must_use]
    pub fn indirect_allergy_text(&self) -> &str {
        self.indirect_allergy.as_deref().unwrap_or_default()
    }
}
