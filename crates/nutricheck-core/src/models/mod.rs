// ABOUTME: Core data models for user profiles, products, and analysis service records
// ABOUTME: Re-exports UserProfile, Product, NutritionFacts, Nutrient and analysis wire types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Data Models
//!
//! Records exchanged with the three upstream services. All of them are
//! read-only inputs as far as NutriCheck is concerned: nothing here is
//! persisted or mutated locally.
//!
//! Optional fields are the norm because the upstream services omit or null
//! out values freely; callers decide what an absent value means.

mod analysis;
mod nutrition;
mod product;
mod profile;

pub use analysis::{AnalysisRequest, AnalysisResponse, NutrientAssessment, RecommendedProduct};
pub use nutrition::{parse_quantity, Nutrient, NutrientUnit, NutritionFacts};
pub use product::Product;
pub use profile::UserProfile;
