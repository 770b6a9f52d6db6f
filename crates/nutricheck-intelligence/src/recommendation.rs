// ABOUTME: Allergen-safe alternative product recommendations by nutrient-profile similarity
// ABOUTME: Ranks catalog products with cosine similarity over median-filled per-100g vectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Alternative Recommendations
//!
//! Candidates are catalog products that share none of the user's allergens
//! (exact token match, the same rule the classifier uses) and are not the
//! base product itself. Each candidate is described by its per-100g amounts
//! of every tracked nutrient; gaps are filled with the candidate pool's
//! median so a missing value neither rewards nor punishes a product.
//! Candidates are ranked by cosine similarity to the base product.

use crate::allergens::parse_allergen_list;
use nutricheck_core::constants::defaults;
use nutricheck_core::errors::{AppError, AppResult};
use nutricheck_core::models::{Nutrient, Product, RecommendedProduct};
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::debug;

const NUTRIENT_COUNT: usize = Nutrient::ALL.len();

/// Per-100g nutrient vector, one slot per [`Nutrient::ALL`] entry
type NutrientVector = [f64; NUTRIENT_COUNT];

/// Per-100g nutrient amounts before gap filling
type RawVector = [Option<f64>; NUTRIENT_COUNT];

/// A candidate with its similarity to the base product
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAlternative<'a> {
    /// Candidate product
    pub product: &'a Product,
    /// Cosine similarity in `[-1, 1]`; 0 when either vector is all zeros
    pub similarity: f64,
}

impl ScoredAlternative<'_> {
    /// Wire form returned to clients
    #[must_use]
    pub fn to_recommended(&self) -> RecommendedProduct {
        RecommendedProduct {
            id: self.product.id,
            name: self.product.name.clone(),
            image_url: self.product.image_url.clone(),
        }
    }
}

/// Whether `product` discloses any of `user_allergies` as a direct allergen
#[must_use]
pub fn contains_user_allergen(product: &Product, user_allergies: &HashSet<String>) -> bool {
    parse_allergen_list(product.allergy_text())
        .iter()
        .any(|allergen| user_allergies.contains(allergen))
}

fn raw_vector(product: &Product) -> RawVector {
    Nutrient::ALL.map(|nutrient| product.nutrition.per_100g(nutrient))
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// Median of each nutrient column over the pool, 0 where the pool has no data
fn column_medians(pool: &[RawVector]) -> NutrientVector {
    let mut medians = [0.0; NUTRIENT_COUNT];
    for (column, slot) in medians.iter_mut().enumerate() {
        let mut present: Vec<f64> = pool.iter().filter_map(|row| row[column]).collect();
        *slot = median(&mut present).unwrap_or_default();
    }
    medians
}

fn fill(raw: &RawVector, medians: &NutrientVector) -> NutrientVector {
    let mut filled = *medians;
    for (slot, value) in filled.iter_mut().zip(raw) {
        if let Some(value) = value {
            *slot = *value;
        }
    }
    filled
}

/// Cosine similarity, defined as 0 when either vector has zero magnitude
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a < f64::EPSILON || norm_b < f64::EPSILON {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Rank every eligible alternative to the product named `base_name`
///
/// The result is sorted by similarity, highest first; ties keep catalog
/// order.
///
/// # Errors
///
/// Returns a `ResourceNotFound` error if no catalog product is named
/// `base_name`.
pub fn rank_alternatives<'a>(
    catalog: &'a [Product],
    base_name: &str,
    user_allergies: &str,
) -> AppResult<Vec<ScoredAlternative<'a>>> {
    let base = catalog
        .iter()
        .find(|product| product.name == base_name)
        .ok_or_else(|| {
            AppError::not_found(format!("Product '{base_name}'")).with_resource_id(base_name)
        })?;

    let allergies: HashSet<String> = parse_allergen_list(user_allergies).into_iter().collect();
    let pool: Vec<&Product> = catalog
        .iter()
        .filter(|product| product.name != base_name)
        .filter(|product| !contains_user_allergen(product, &allergies))
        .collect();

    let raw_pool: Vec<RawVector> = pool.iter().copied().map(raw_vector).collect();
    let medians = column_medians(&raw_pool);
    let base_vector = fill(&raw_vector(base), &medians);

    let mut scored: Vec<ScoredAlternative<'a>> = pool
        .par_iter()
        .zip(raw_pool.par_iter())
        .map(|(&product, raw)| ScoredAlternative {
            product,
            similarity: cosine_similarity(&base_vector, &fill(raw, &medians)),
        })
        .collect();

    // stable: equal scores keep catalog order
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    debug!(
        base = base_name,
        catalog_size = catalog.len(),
        pool_size = scored.len(),
        "Ranked alternative products"
    );
    Ok(scored)
}

/// Top `top_k` allergen-safe alternatives to the product named `base_name`
///
/// # Errors
///
/// Returns a `ResourceNotFound` error if no catalog product is named
/// `base_name`.
pub fn recommend_alternatives(
    catalog: &[Product],
    base_name: &str,
    user_allergies: &str,
    top_k: usize,
) -> AppResult<Vec<RecommendedProduct>> {
    Ok(rank_alternatives(catalog, base_name, user_allergies)?
        .iter()
        .take(top_k)
        .map(ScoredAlternative::to_recommended)
        .collect())
}

/// [`recommend_alternatives`] with the default result count
///
/// # Errors
///
/// Returns a `ResourceNotFound` error if no catalog product is named
/// `base_name`.
pub fn recommend_default(
    catalog: &[Product],
    base_name: &str,
    user_allergies: &str,
) -> AppResult<Vec<RecommendedProduct>> {
    recommend_alternatives(
        catalog,
        base_name,
        user_allergies,
        defaults::RECOMMENDATION_TOP_K,
    )
}
