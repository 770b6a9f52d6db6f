// ABOUTME: Nutrition facts model with typed nutrient identifiers and display units
// ABOUTME: Accepts catalog values as JSON numbers or unit-suffixed strings like "1,200mg"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

use crate::constants::defaults;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Display unit of a nutrient value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NutrientUnit {
    /// Kilocalories
    Kcal,
    /// Milligrams
    Mg,
    /// Grams
    G,
}

impl NutrientUnit {
    /// Unit suffix for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Kcal => "kcal",
            Self::Mg => "mg",
            Self::G => "g",
        }
    }
}

impl fmt::Display for NutrientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Nutrient tracked by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy
    Calories,
    /// Sodium
    Sodium,
    /// Total carbohydrate
    Carbohydrate,
    /// Sugars
    Sugar,
    /// Total fat
    Fat,
    /// Trans fat
    TransFat,
    /// Saturated fat
    SaturatedFat,
    /// Cholesterol
    Cholesterol,
    /// Protein
    Protein,
    /// Calcium
    Calcium,
    /// Caffeine
    Caffeine,
}

impl Nutrient {
    /// Every nutrient, in catalog column order
    pub const ALL: [Self; 11] = [
        Self::Calories,
        Self::Sodium,
        Self::Sugar,
        Self::Carbohydrate,
        Self::Fat,
        Self::Protein,
        Self::Cholesterol,
        Self::SaturatedFat,
        Self::TransFat,
        Self::Calcium,
        Self::Caffeine,
    ];

    /// Rows of the nutrition facts panel, top to bottom
    pub const PANEL_ORDER: [Self; 9] = [
        Self::Calories,
        Self::Sodium,
        Self::Carbohydrate,
        Self::Sugar,
        Self::Fat,
        Self::TransFat,
        Self::SaturatedFat,
        Self::Cholesterol,
        Self::Protein,
    ];

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> NutrientUnit {
        match self {
            Self::Calories => NutrientUnit::Kcal,
            Self::Sodium | Self::Cholesterol | Self::Calcium | Self::Caffeine => NutrientUnit::Mg,
            Self::Carbohydrate
            | Self::Sugar
            | Self::Fat
            | Self::TransFat
            | Self::SaturatedFat
            | Self::Protein => NutrientUnit::G,
        }
    }

    /// English display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Sodium => "Sodium",
            Self::Carbohydrate => "Carbohydrate",
            Self::Sugar => "Sugars",
            Self::Fat => "Fat",
            Self::TransFat => "Trans fat",
            Self::SaturatedFat => "Saturated fat",
            Self::Cholesterol => "Cholesterol",
            Self::Protein => "Protein",
            Self::Calcium => "Calcium",
            Self::Caffeine => "Caffeine",
        }
    }

    /// Korean display label, as printed on domestic nutrition labels
    #[must_use]
    pub const fn korean_label(&self) -> &'static str {
        match self {
            Self::Calories => "열량",
            Self::Sodium => "나트륨",
            Self::Carbohydrate => "탄수화물",
            Self::Sugar => "당류",
            Self::Fat => "지방",
            Self::TransFat => "트랜스지방",
            Self::SaturatedFat => "포화지방",
            Self::Cholesterol => "콜레스테롤",
            Self::Protein => "단백질",
            Self::Calcium => "칼슘",
            Self::Caffeine => "카페인",
        }
    }

    /// Resolve a nutrient from an English or Korean name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let lowered = trimmed.to_lowercase().replace([' ', '_', '-'], "");
        let nutrient = match lowered.as_str() {
            "calories" | "calorie" | "energy" | "kcal" | "열량" | "칼로리" => Self::Calories,
            "sodium" | "나트륨" => Self::Sodium,
            "carbohydrate" | "carbohydrates" | "carbs" | "탄수화물" => Self::Carbohydrate,
            "sugar" | "sugars" | "당류" => Self::Sugar,
            "fat" | "지방" => Self::Fat,
            "transfat" | "트랜스지방" => Self::TransFat,
            "saturatedfat" | "포화지방" => Self::SaturatedFat,
            "cholesterol" | "콜레스테롤" => Self::Cholesterol,
            "protein" | "단백질" => Self::Protein,
            "calcium" | "칼슘" => Self::Calcium,
            "caffeine" | "카페인" => Self::Caffeine,
            _ => return None,
        };
        Some(nutrient)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a catalog quantity such as `"1,200mg"`, `"350 kcal"` or `"12.5g"`
///
/// Thousands separators and unit suffixes are stripped before parsing.
/// Returns `None` for anything that is not a finite number afterwards.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();
    let number = ["kcal", "mg", "g"]
        .iter()
        .find_map(|unit| cleaned.strip_suffix(unit))
        .unwrap_or(cleaned)
        .trim();
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => parse_quantity(&text),
        _ => None,
    })
}

/// Per-serving nutrient amounts of a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    /// Energy (kcal)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub calories: Option<f64>,
    /// Sodium (mg)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub sodium: Option<f64>,
    /// Carbohydrate (g)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub carbohydrate: Option<f64>,
    /// Sugars (g)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub sugar: Option<f64>,
    /// Fat (g)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub fat: Option<f64>,
    /// Trans fat (g)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub trans_fat: Option<f64>,
    /// Saturated fat (g)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub saturated_fat: Option<f64>,
    /// Cholesterol (mg)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub cholesterol: Option<f64>,
    /// Protein (g)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub protein: Option<f64>,
    /// Calcium (mg)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub calcium: Option<f64>,
    /// Caffeine (mg)
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub caffeine: Option<f64>,
    /// Net content of one serving (g); per-100g figures derive from it
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub serving_size: Option<f64>,
}

impl NutritionFacts {
    /// Amount of `nutrient` per serving, if declared
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Sodium => self.sodium,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Sugar => self.sugar,
            Nutrient::Fat => self.fat,
            Nutrient::TransFat => self.trans_fat,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Protein => self.protein,
            Nutrient::Calcium => self.calcium,
            Nutrient::Caffeine => self.caffeine,
        }
    }

    /// Set the amount of `nutrient` per serving
    pub fn set(&mut self, nutrient: Nutrient, value: Option<f64>) {
        let slot = match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Carbohydrate => &mut self.carbohydrate,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::Fat => &mut self.fat,
            Nutrient::TransFat => &mut self.trans_fat,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Caffeine => &mut self.caffeine,
        };
        *slot = value;
    }

    /// Amount of `nutrient` normalized to 100g of product
    ///
    /// Uses the declared serving size, falling back to 100g when it is
    /// absent or zero. Similarity vectors rely on this fallback.
    #[must_use]
    pub fn per_100g(&self, nutrient: Nutrient) -> Option<f64> {
        let serving = self
            .serving_size
            .filter(|size| *size > 0.0)
            .unwrap_or(defaults::SERVING_SIZE_GRAMS);
        self.get(nutrient).map(|value| value / serving * 100.0)
    }

    /// Amount of `nutrient` per 100g using the declared serving size
    ///
    /// An absent serving size counts as 100g. A zero or negative one cannot
    /// be normalized and yields `None`.
    #[must_use]
    pub fn per_declared_100g(&self, nutrient: Nutrient) -> Option<f64> {
        let serving = self.serving_size.unwrap_or(defaults::SERVING_SIZE_GRAMS);
        if serving <= 0.0 {
            return None;
        }
        self.get(nutrient).map(|value| value / serving * 100.0)
    }
}
