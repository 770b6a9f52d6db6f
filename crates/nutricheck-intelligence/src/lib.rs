// ABOUTME: Suitability intelligence for NutriCheck: allergen verdicts, nutrient ratings, alternatives
// ABOUTME: Pure computations over profile and catalog records with no I/O of their own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

#![deny(unsafe_code)]

//! # `NutriCheck` Intelligence
//!
//! - [`allergens`]: the suitability classifier behind the nutrition facts view
//! - [`nutrient_evaluation`]: condition-driven ratings against catalog averages
//! - [`recommendation`]: allergen-safe alternatives by nutrient similarity

pub mod allergens;
pub mod nutrient_evaluation;
pub mod recommendation;

pub use allergens::{
    classify, classify_json_fields, classify_with_locale, parse_allergen_list, NoteLocale,
    SuitabilityReport, SuitabilityVerdict,
};
pub use nutrient_evaluation::{
    evaluate_nutrients, EvaluationStatus, HealthCondition, NutrientEvaluation,
};
pub use recommendation::{rank_alternatives, recommend_alternatives, ScoredAlternative};
