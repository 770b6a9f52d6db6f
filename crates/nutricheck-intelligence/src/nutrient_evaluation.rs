// ABOUTME: Health-condition driven nutrient evaluation against catalog averages
// ABOUTME: Maps declared medical conditions to target nutrients and rates a product per 100g
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! # Nutrient Evaluation
//!
//! A user's medical conditions select a set of target nutrients, each with a
//! desired direction. For every target the product's per-100g amount is
//! compared to the catalog's per-100g average and rated.
//!
//! | ratio to average | status           |
//! |------------------|------------------|
//! | value is 0       | `NotContained`   |
//! | unknown          | `InsufficientData` |
//! | > 1.1            | `AboveAverage`   |
//! | < 0.9            | `BelowAverage`   |
//! | otherwise        | `NearAverage`    |

use nutricheck_core::models::{Nutrient, NutrientAssessment, NutritionFacts, Product};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use nutricheck_core::models::parse_quantity;

/// Ratio above which a nutrient counts as above the catalog average
pub const ABOVE_AVERAGE_RATIO: f64 = 1.1;

/// Ratio below which a nutrient counts as below the catalog average
pub const BELOW_AVERAGE_RATIO: f64 = 0.9;

/// Separators accepted between condition names
const CONDITION_SEPARATORS: [char; 2] = [',', ';'];

/// Whether less or more of a nutrient is preferable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Prefer lower amounts
    Low,
    /// Prefer higher amounts
    High,
}

/// Medical condition or dietary goal a user can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthCondition {
    /// High blood pressure
    Hypertension,
    /// Diabetes
    Diabetes,
    /// Weight loss goal
    WeightLoss,
    /// Hyperlipidemia
    Hyperlipidemia,
    /// Cardiovascular disease
    Cardiovascular,
    /// Kidney disease
    KidneyDisease,
    /// Liver disease
    LiverDisease,
    /// Osteoporosis
    Osteoporosis,
    /// High cholesterol
    Hypercholesterolemia,
    /// Gout
    Gout,
}

impl HealthCondition {
    /// Resolve a condition from an English or Korean name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace([' ', '_', '-'], "");
        let condition = match normalized.as_str() {
            "hypertension" | "highbloodpressure" | "고혈압" => Self::Hypertension,
            "diabetes" | "당뇨" | "당뇨병" => Self::Diabetes,
            "weightloss" | "diet" | "감량" | "체중감량" => Self::WeightLoss,
            "hyperlipidemia" | "고지혈증" => Self::Hyperlipidemia,
            "cardiovascular" | "cardiovasculardisease" | "heartdisease" | "심혈관질환" => {
                Self::Cardiovascular
            }
            "kidneydisease" | "kidney" | "신장질환" => Self::KidneyDisease,
            "liverdisease" | "liver" | "간질환" => Self::LiverDisease,
            "osteoporosis" | "골다공증" => Self::Osteoporosis,
            "hypercholesterolemia" | "highcholesterol" | "고콜레스테롤혈증" => {
                Self::Hypercholesterolemia
            }
            "gout" | "통풍" => Self::Gout,
            _ => return None,
        };
        Some(condition)
    }

    /// Parse a delimited condition field, dropping names that are not recognized
    #[must_use]
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(CONDITION_SEPARATORS)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                let condition = Self::from_name(token);
                if condition.is_none() {
                    debug!(condition = token, "Ignoring unrecognized health condition");
                }
                condition
            })
            .collect()
    }

    /// Nutrients this condition cares about
    #[must_use]
    pub const fn targets(&self) -> &'static [(Nutrient, Direction)] {
        use Direction::{High, Low};
        match self {
            Self::Hypertension => &[(Nutrient::Sodium, Low)],
            Self::Diabetes => &[(Nutrient::Sugar, Low)],
            Self::WeightLoss => &[(Nutrient::Calories, Low)],
            Self::Hyperlipidemia => &[
                (Nutrient::Fat, Low),
                (Nutrient::SaturatedFat, Low),
                (Nutrient::TransFat, Low),
            ],
            Self::Cardiovascular => &[
                (Nutrient::Sodium, Low),
                (Nutrient::SaturatedFat, Low),
                (Nutrient::Cholesterol, Low),
            ],
            Self::KidneyDisease => &[(Nutrient::Sodium, Low), (Nutrient::Protein, Low)],
            Self::LiverDisease => &[(Nutrient::Sugar, Low), (Nutrient::Fat, Low)],
            Self::Osteoporosis => &[(Nutrient::Calcium, High), (Nutrient::Sodium, Low)],
            Self::Hypercholesterolemia => {
                &[(Nutrient::Cholesterol, Low), (Nutrient::SaturatedFat, Low)]
            }
            Self::Gout => &[(Nutrient::Protein, Low)],
        }
    }
}

/// Merge the targets of several conditions
///
/// First mention fixes a nutrient's position; later conditions override its
/// direction. An empty result falls back to `{calories: low}`.
#[must_use]
pub fn targets_for(conditions: &[HealthCondition]) -> Vec<(Nutrient, Direction)> {
    let mut targets: Vec<(Nutrient, Direction)> = Vec::new();
    for &(nutrient, direction) in conditions.iter().flat_map(HealthCondition::targets) {
        if let Some(existing) = targets.iter_mut().find(|(known, _)| *known == nutrient) {
            existing.1 = direction;
        } else {
            targets.push((nutrient, direction));
        }
    }
    if targets.is_empty() {
        targets.push((Nutrient::Calories, Direction::Low));
    }
    targets
}

/// Rating of one nutrient relative to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// The product declares zero of this nutrient
    NotContained,
    /// The product value or the catalog average is unknown
    InsufficientData,
    /// More than 10% above the catalog average
    AboveAverage,
    /// More than 10% below the catalog average
    BelowAverage,
    /// Within 10% of the catalog average
    NearAverage,
}

impl EvaluationStatus {
    /// Rate a per-100g value against a per-100g average
    #[must_use]
    pub fn rate(value_per_100g: Option<f64>, average_per_100g: Option<f64>) -> Self {
        let Some(value) = value_per_100g else {
            return Self::InsufficientData;
        };
        if value.abs() < f64::EPSILON {
            return Self::NotContained;
        }
        match average_per_100g.filter(|average| average.abs() >= f64::EPSILON) {
            None => Self::InsufficientData,
            Some(average) => {
                let ratio = value / average;
                if ratio > ABOVE_AVERAGE_RATIO {
                    Self::AboveAverage
                } else if ratio < BELOW_AVERAGE_RATIO {
                    Self::BelowAverage
                } else {
                    Self::NearAverage
                }
            }
        }
    }

    /// English label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotContained => "not contained",
            Self::InsufficientData => "insufficient data",
            Self::AboveAverage => "above average",
            Self::BelowAverage => "below average",
            Self::NearAverage => "near average",
        }
    }

    /// Korean label, as the analysis service reports it
    #[must_use]
    pub const fn korean_label(&self) -> &'static str {
        match self {
            Self::NotContained => "미함유",
            Self::InsufficientData => "정보부족",
            Self::AboveAverage => "평균보다 높음",
            Self::BelowAverage => "평균보다 낮음",
            Self::NearAverage => "평균과 비슷함",
        }
    }

    /// Parse either label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        [
            Self::NotContained,
            Self::InsufficientData,
            Self::AboveAverage,
            Self::BelowAverage,
            Self::NearAverage,
        ]
        .into_iter()
        .find(|status| {
            let trimmed = label.trim();
            status.label() == trimmed || status.korean_label() == trimmed
        })
    }

    /// Whether this rating is favorable for a nutrient with `direction`
    #[must_use]
    pub const fn is_favorable(&self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Self::NotContained | Self::BelowAverage, Direction::Low)
                | (Self::AboveAverage, Direction::High)
        )
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluation of a single target nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientEvaluation {
    /// Nutrient evaluated
    pub nutrient: Nutrient,
    /// Preferred direction for the user
    pub direction: Direction,
    /// Product amount per 100g
    pub value_per_100g: Option<f64>,
    /// Catalog average per 100g
    pub catalog_average_per_100g: Option<f64>,
    /// Rating
    pub status: EvaluationStatus,
}

impl NutrientEvaluation {
    /// Wire form used by the analysis service
    #[must_use]
    pub fn to_assessment(&self) -> NutrientAssessment {
        NutrientAssessment {
            nutrient: self.nutrient.korean_label().to_owned(),
            evaluation: self.status.korean_label().to_owned(),
        }
    }
}

/// Mean per-100g amount of `nutrient` across catalog products
///
/// Only products that declare both a positive serving size and the nutrient
/// count.
#[must_use]
pub fn catalog_average_per_100g(catalog: &[Product], nutrient: Nutrient) -> Option<f64> {
    let values: Vec<f64> = catalog
        .iter()
        .filter(|product| product.nutrition.serving_size.is_some_and(|size| size > 0.0))
        .filter_map(|product| product.nutrition.per_declared_100g(nutrient))
        .collect();
    mean(&values)
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let count = u32::try_from(values.len()).map_or(f64::from(u32::MAX), f64::from);
    Some(values.iter().sum::<f64>() / count)
}

/// Evaluate a product's target nutrients for a user's conditions
#[must_use]
pub fn evaluate_nutrients(
    facts: &NutritionFacts,
    catalog: &[Product],
    conditions: &[HealthCondition],
) -> Vec<NutrientEvaluation> {
    targets_for(conditions)
        .into_iter()
        .map(|(nutrient, direction)| {
            let value_per_100g = facts.per_declared_100g(nutrient);
            let catalog_average_per_100g = catalog_average_per_100g(catalog, nutrient);
            let declared_zero = facts
                .get(nutrient)
                .is_some_and(|value| value.abs() < f64::EPSILON);
            let status = if declared_zero {
                EvaluationStatus::NotContained
            } else {
                EvaluationStatus::rate(value_per_100g, catalog_average_per_100g)
            };
            NutrientEvaluation {
                nutrient,
                direction,
                value_per_100g,
                catalog_average_per_100g,
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, sodium: Option<f64>, serving: Option<f64>) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            nutrition: NutritionFacts {
                sodium,
                serving_size: serving,
                ..NutritionFacts::default()
            },
            ..Product::default()
        }
    }

    #[test]
    fn test_condition_names() {
        assert_eq!(HealthCondition::from_name("고혈압"), Some(HealthCondition::Hypertension));
        assert_eq!(HealthCondition::from_name("Weight Loss"), Some(HealthCondition::WeightLoss));
        assert_eq!(HealthCondition::from_name("insomnia"), None);
        assert_eq!(
            HealthCondition::parse_list("당뇨; gout, unknown"),
            vec![HealthCondition::Diabetes, HealthCondition::Gout]
        );
    }

    #[test]
    fn test_targets_default_to_calories() {
        assert_eq!(targets_for(&[]), vec![(Nutrient::Calories, Direction::Low)]);
    }

    #[test]
    fn test_targets_merge_without_duplicates() {
        let targets = targets_for(&[HealthCondition::Hypertension, HealthCondition::KidneyDisease]);
        assert_eq!(
            targets,
            vec![(Nutrient::Sodium, Direction::Low), (Nutrient::Protein, Direction::Low)]
        );
    }

    #[test]
    fn test_rate_thresholds() {
        assert_eq!(EvaluationStatus::rate(Some(0.0), Some(5.0)), EvaluationStatus::NotContained);
        assert_eq!(EvaluationStatus::rate(None, Some(5.0)), EvaluationStatus::InsufficientData);
        assert_eq!(EvaluationStatus::rate(Some(5.0), None), EvaluationStatus::InsufficientData);
        assert_eq!(EvaluationStatus::rate(Some(12.0), Some(10.0)), EvaluationStatus::AboveAverage);
        assert_eq!(EvaluationStatus::rate(Some(8.0), Some(10.0)), EvaluationStatus::BelowAverage);
        assert_eq!(EvaluationStatus::rate(Some(10.5), Some(10.0)), EvaluationStatus::NearAverage);
    }

    #[test]
    fn test_catalog_average_skips_products_without_serving_size() {
        let catalog = vec![
            product(1, Some(1000.0), Some(100.0)),
            product(2, Some(400.0), Some(200.0)),
            product(3, Some(9999.0), None),
        ];
        let average = catalog_average_per_100g(&catalog, Nutrient::Sodium).unwrap();
        assert!((average - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_average_skips_zero_serving_size() {
        let catalog = vec![product(1, Some(100.0), Some(0.0)), product(2, Some(100.0), Some(50.0))];
        let average = catalog_average_per_100g(&catalog, Nutrient::Sodium).unwrap();
        assert!((average - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_serving_size_is_insufficient_data() {
        let catalog = vec![product(1, Some(1000.0), Some(100.0))];
        let facts = NutritionFacts {
            sodium: Some(500.0),
            serving_size: Some(0.0),
            ..NutritionFacts::default()
        };
        let results = evaluate_nutrients(&facts, &catalog, &[HealthCondition::Hypertension]);
        assert_eq!(results[0].value_per_100g, None);
        assert_eq!(results[0].status, EvaluationStatus::InsufficientData);

        let empty = NutritionFacts {
            sodium: Some(0.0),
            ..facts
        };
        let results = evaluate_nutrients(&empty, &catalog, &[HealthCondition::Hypertension]);
        assert_eq!(results[0].status, EvaluationStatus::NotContained);
    }

    #[test]
    fn test_evaluate_hypertension() {
        let catalog = vec![
            product(1, Some(1000.0), Some(100.0)),
            product(2, Some(1000.0), Some(100.0)),
        ];
        let facts = NutritionFacts {
            sodium: Some(1500.0),
            serving_size: Some(100.0),
            ..NutritionFacts::default()
        };
        let results = evaluate_nutrients(&facts, &catalog, &[HealthCondition::Hypertension]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, EvaluationStatus::AboveAverage);
        assert!(!results[0].status.is_favorable(results[0].direction));
        assert_eq!(results[0].to_assessment().evaluation, "평균보다 높음");
    }
}
